//! Validation error kinds.

use thiserror::Error;

/// A validation failure for a candidate event.
///
/// Every variant names the offending field so a UI can focus or highlight
/// the matching input. Validation is first-failure-wins: a draft with
/// several problems reports only the first check that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty after trimming.
    #[error("{field} is required")]
    RequiredFieldMissing { field: &'static str },

    /// A text field exceeded its maximum length.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// A field did not match its canonical token shape.
    #[error("{field} has an invalid format")]
    InvalidFormat { field: &'static str },

    /// A field matched the token shape but denotes an impossible value
    /// (e.g., `2025-02-30`).
    #[error("{field} has an invalid value")]
    InvalidValue { field: &'static str },

    /// A cross-field range constraint was violated.
    #[error("invalid range: {message}")]
    InvalidRange { message: String },
}

impl ValidationError {
    /// The field this error refers to. Range violations report the
    /// end-of-range field, since that is the input the user has to fix.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldMissing { field }
            | ValidationError::FieldTooLong { field, .. }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidValue { field } => field,
            ValidationError::InvalidRange { .. } => "endTime",
        }
    }
}

/// Convenience alias used throughout calgrid-core.
pub type Result<T> = std::result::Result<T, ValidationError>;
