//! Error taxonomy for store operations.

use calgrid_core::{EventId, ValidationError};
use thiserror::Error;

/// Errors surfaced by an [`EventStore`](crate::store::EventStore).
///
/// Three kinds with different handling downstream: validation failures are
/// recoverable locally and name the offending field; `NotFound` is a normal
/// outcome to show the user, not a fault; `Transport` covers everything
/// between the caller and the stored data and is the only retryable kind.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The draft failed the validation gate; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No event with the given id exists.
    #[error("event not found: {id}")]
    NotFound { id: EventId },

    /// Failure to reach or persist the underlying storage.
    #[error("transport failure: {message}")]
    Transport { message: String },
}

impl StoreError {
    /// Whether a retry with backoff could plausibly succeed. Only transport
    /// failures qualify; validation failures and missing ids are
    /// deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Transport { .. })
    }

    pub(crate) fn transport(message: impl Into<String>) -> Self {
        StoreError::Transport {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout calgrid-store.
pub type Result<T> = std::result::Result<T, StoreError>;
