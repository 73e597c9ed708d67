//! Tests for the boundary retry policy: transient failures retry with a
//! bounded number of attempts, deterministic failures return immediately.

use std::time::Duration;

use calgrid_core::EventId;
use calgrid_store::{retry_transient, RetryPolicy, StoreError};

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        backoff: Duration::from_millis(1),
    }
}

#[test]
fn success_on_first_attempt_runs_once() {
    let mut calls = 0;
    let result = retry_transient(&fast_policy(3), || {
        calls += 1;
        Ok(42)
    });
    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls, 1);
}

#[test]
fn transient_failures_retry_until_success() {
    let mut calls = 0;
    let result = retry_transient(&fast_policy(3), || {
        calls += 1;
        if calls < 3 {
            Err(StoreError::Transport {
                message: "connection refused".to_string(),
            })
        } else {
            Ok("reached")
        }
    });
    assert_eq!(result.unwrap(), "reached");
    assert_eq!(calls, 3);
}

#[test]
fn attempts_are_bounded() {
    let mut calls = 0;
    let result: Result<(), _> = retry_transient(&fast_policy(3), || {
        calls += 1;
        Err(StoreError::Transport {
            message: "still down".to_string(),
        })
    });
    assert!(matches!(result.unwrap_err(), StoreError::Transport { .. }));
    assert_eq!(calls, 3, "exactly max_attempts calls");
}

#[test]
fn not_found_returns_immediately() {
    let mut calls = 0;
    let result: Result<(), _> = retry_transient(&fast_policy(5), || {
        calls += 1;
        Err(StoreError::NotFound {
            id: EventId::new("evt-404"),
        })
    });
    assert!(matches!(result.unwrap_err(), StoreError::NotFound { .. }));
    assert_eq!(calls, 1, "deterministic failures never retry");
}

#[test]
fn validation_failures_return_immediately() {
    use calgrid_core::ValidationError;

    let mut calls = 0;
    let result: Result<(), _> = retry_transient(&fast_policy(5), || {
        calls += 1;
        Err(StoreError::Validation(
            ValidationError::RequiredFieldMissing { field: "title" },
        ))
    });
    assert!(matches!(result.unwrap_err(), StoreError::Validation(_)));
    assert_eq!(calls, 1);
}
