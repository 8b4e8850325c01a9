//! Retrying Invoker — bounded retry around a fallible async operation.
//!
//! Attempts are strictly sequential; the only suspension point is the
//! backoff sleep between a failed attempt and the next one. Each invocation
//! owns its attempt counter — nothing is shared across concurrent calls.

use std::future::Future;

use tracing::warn;

use crate::resilience::backoff::BackoffSchedule;
use crate::resilience::classify::Classify;

/// Default cap on total attempts (first call included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Retry policy: attempt bound plus backoff schedule.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: BackoffSchedule,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: BackoffSchedule::default(),
        }
    }
}

/// Invokes `operation` until it succeeds, fails permanently, or the attempt
/// bound is reached.
///
/// Only errors classified as service-busy are retried. On exhaustion the
/// error from the *last* attempt propagates unchanged — no aggregation of
/// prior failures.
pub async fn invoke_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    E: Classify + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt: u32 = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.class().is_retryable() && attempt < policy.max_attempts => {
                let delay = policy.backoff.delay_for(attempt);
                warn!(
                    "Attempt {attempt}/{} failed ({err}), retrying in {}ms",
                    policy.max_attempts,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resilience::classify::{classify, ErrorClass};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeError(&'static str);

    impl std::fmt::Display for FakeError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Classify for FakeError {
        fn class(&self) -> ErrorClass {
            classify(None, self.0)
        }
    }

    /// Operation failing `failures` times with `error`, then returning 42.
    fn flaky_op(
        calls: Arc<AtomicU32>,
        failures: u32,
        error: &'static str,
    ) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = Result<u32, FakeError>> + Send>>
    {
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n <= failures {
                    Err(FakeError(error))
                } else {
                    Ok(42)
                }
            })
        }
    }

    #[tokio::test]
    async fn test_success_on_first_try_calls_once_with_no_delay() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = std::time::Instant::now();
        let result =
            invoke_with_retry(&RetryPolicy::default(), flaky_op(calls.clone(), 0, "unused")).await;
        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_then_success_waits_linearly() {
        // Scenario: two 503 failures, success on the third call.
        // Expected waits: 1000ms then 2000ms.
        let calls = Arc::new(AtomicU32::new(0));
        let start = tokio::time::Instant::now();
        let result = invoke_with_retry(
            &RetryPolicy::default(),
            flaky_op(calls.clone(), 2, "API error (status 503): overloaded"),
        )
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_propagates_last_error_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = invoke_with_retry(
            &RetryPolicy::default(),
            flaky_op(calls.clone(), 10, "model is overloaded"),
        )
        .await;
        assert_eq!(result, Err(FakeError("model is overloaded")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_propagates_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = std::time::Instant::now();
        let result = invoke_with_retry(
            &RetryPolicy::default(),
            flaky_op(calls.clone(), 10, "Invalid argument: topic required"),
        )
        .await;
        assert_eq!(result, Err(FakeError("Invalid argument: topic required")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_quota_error_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = invoke_with_retry(
            &RetryPolicy::default(),
            flaky_op(calls.clone(), 10, "429: quota exceeded"),
        )
        .await;
        assert_eq!(result, Err(FakeError("429: quota exceeded")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_max_attempts_one_never_retries_transient_errors() {
        let calls = Arc::new(AtomicU32::new(0));
        let policy = RetryPolicy {
            max_attempts: 1,
            ..RetryPolicy::default()
        };
        let result = invoke_with_retry(&policy, flaky_op(calls.clone(), 10, "503")).await;
        assert_eq!(result, Err(FakeError("503")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_overload_translates_to_busy_message() {
        // End to end: retries exhausted on overload, the propagated error
        // maps to the service-busy notification.
        let calls = Arc::new(AtomicU32::new(0));
        let err = invoke_with_retry(
            &RetryPolicy::default(),
            flaky_op(calls.clone(), 10, "overloaded"),
        )
        .await
        .unwrap_err();
        let message = crate::resilience::translate(&err);
        assert_eq!(message.title, "Model Busy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_backoff_schedule_is_respected() {
        let calls = Arc::new(AtomicU32::new(0));
        let policy = RetryPolicy {
            max_attempts: 3,
            backoff: BackoffSchedule::new(Duration::from_millis(100)),
        };
        let start = tokio::time::Instant::now();
        let result = invoke_with_retry(&policy, flaky_op(calls.clone(), 2, "overloaded")).await;
        assert_eq!(result, Ok(42));
        // 100ms + 200ms
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }
}
