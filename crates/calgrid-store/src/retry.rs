//! Bounded retry with backoff for transient store failures.
//!
//! Retrying is the boundary's job, never the engine's: the grid and
//! validation logic are pure and have nothing to retry. Only failures
//! classified retryable ([`StoreError::is_retryable`]) are attempted again;
//! `NotFound` and validation failures return immediately.

use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::Result;

/// How many times to attempt an operation and how long to wait between
/// attempts. Backoff is linear: the wait before attempt N is
/// `backoff * N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(200),
        }
    }
}

/// Run `op`, retrying transient failures up to the policy's attempt limit.
///
/// Non-retryable failures (validation, `NotFound`) and the final transient
/// failure are returned as-is.
pub fn retry_transient<T>(policy: &RetryPolicy, mut op: impl FnMut() -> Result<T>) -> Result<T> {
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                warn!(attempt, error = %err, "transient store failure, retrying");
                thread::sleep(policy.backoff * attempt);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
