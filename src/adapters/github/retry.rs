//! Exponential backoff for transient GitHub API failures.
//!
//! Backoff doubles with each retry and is capped at `max_backoff_ms`.
//! Only errors for which [`ApiError::is_transient`] holds are retried:
//! 429, 5xx and network failures. 401, 404 and other client errors fail
//! immediately.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::models::RetryConfig;

/// Retry policy configuration for handling transient errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    max_retries: u32,
    /// Initial backoff duration in milliseconds
    initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds
    max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(
            config.max_retries,
            config.initial_backoff_ms,
            config.max_backoff_ms,
        )
    }
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff_ms,
            max_backoff_ms,
        }
    }

    /// A policy that makes exactly one attempt.
    pub const fn disabled() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Run `operation` until it succeeds, fails permanently, or retries run out.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> ApiResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(retries = attempt, "GitHub request succeeded after retrying");
                    }
                    return Ok(result);
                }
                Err(err) => {
                    if !self.should_retry(&err, attempt) {
                        if attempt > 0 {
                            warn!(
                                attempts = attempt + 1,
                                error = %err,
                                "GitHub request failed after retrying"
                            );
                        }
                        return Err(err);
                    }

                    let backoff = self.calculate_backoff(attempt);
                    warn!(
                        attempt = attempt + 1,
                        backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "transient GitHub error, retrying"
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Formula: min(initial_backoff * 2^attempt, max_backoff)
    fn calculate_backoff(&self, attempt: u32) -> Duration {
        let backoff_ms = self
            .initial_backoff_ms
            .saturating_mul(2_u64.saturating_pow(attempt))
            .min(self.max_backoff_ms);

        Duration::from_millis(backoff_ms)
    }

    const fn should_retry(&self, err: &ApiError, attempt: u32) -> bool {
        attempt < self.max_retries && err.is_transient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(5, 100, 1_000);
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(200));
        assert_eq!(policy.calculate_backoff(3), Duration::from_millis(800));
        assert_eq!(policy.calculate_backoff(4), Duration::from_millis(1_000));
        assert_eq!(policy.calculate_backoff(63), Duration::from_millis(1_000));
    }

    #[test]
    fn test_from_config() {
        let policy = RetryPolicy::from(&RetryConfig::default());
        assert_eq!(policy, RetryPolicy::new(3, 500, 8_000));
    }

    #[tokio::test]
    async fn test_retries_transient_errors_until_exhausted() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(2, 1, 1);

        let result: ApiResult<()> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Status {
                    status: 503,
                    body: String::new(),
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_error() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, 1, 1);

        let result = policy
            .execute(|| async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ApiError::Transport("connection reset".into()))
                } else {
                    Ok(7)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, 1, 1);

        let result: ApiResult<()> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::NotFound {
                    path: "/projects/columns/cards/1".into(),
                })
            })
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disabled_policy_makes_one_attempt() {
        let calls = AtomicU32::new(0);
        let result: ApiResult<()> = RetryPolicy::disabled()
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Transport("timeout".into()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
