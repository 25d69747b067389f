//! Retry policies for service operations.
//!
//! A [`RetryPolicy`] decides whether an attempt's HTTP status warrants another
//! try and how long to sleep before it. Policies are plain values: attach one
//! to an individual request, set one client-wide with
//! [`VirtualNetwork::set_retry_policy`](crate::api::VirtualNetwork::set_retry_policy),
//! or rely on each operation's built-in default. The most specific policy
//! wins.
use std::{fmt, time::Duration};

use http::StatusCode;
use tower::{
    retry::backoff::{Backoff, ExponentialBackoff, ExponentialBackoffMaker, MakeBackoff},
    util::rng::HasherRng,
};

/// Backoff configuration validation error.
pub use tower::retry::backoff::InvalidBackoff;

/// Retry policy with exponential backoff for throttled or transiently
/// failing requests.
///
/// Retries requests that fail with:
/// - 429 Too Many Requests
/// - 500 Internal Server Error
/// - 502 Bad Gateway
/// - 503 Service Unavailable
/// - 504 Gateway Timeout
///
/// Connection-level failures are never retried here; only responses the
/// server actually produced are classified.
#[derive(Clone)]
pub struct RetryPolicy {
    backoff: ExponentialBackoff,
    max_retries: u32,
}

impl RetryPolicy {
    /// Create a new retry policy with custom parameters.
    ///
    /// `min_delay` is the initial sleep, `max_delay` caps the exponential
    /// growth, and `max_retries` bounds the number of attempts after the
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBackoff`] if the backoff parameters are invalid.
    pub fn new(min_delay: Duration, max_delay: Duration, max_retries: u32) -> Result<Self, InvalidBackoff> {
        let backoff =
            ExponentialBackoffMaker::new(min_delay, max_delay, 2.0, HasherRng::new())?.make_backoff();

        Ok(Self { backoff, max_retries })
    }

    /// A policy that never retries. Mutating operations on resources without
    /// idempotency tokens default to this.
    pub fn none() -> Self {
        // The backoff maker rejects a zero maximum delay; with a zero retry
        // budget the backoff is never consulted, so any small cap works.
        Self::new(Duration::ZERO, Duration::from_millis(1), 0)
            .expect("no-retry RetryPolicy parameters are valid")
    }

    /// The standard policy: up to 3 retries, 500ms initial delay, 5s cap.
    pub fn standard() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_secs(5), 3)
            .expect("standard RetryPolicy parameters are valid")
    }

    /// Maximum number of retries after the initial attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub(crate) fn next_backoff(&mut self) -> tokio::time::Sleep {
        self.backoff.next_backoff()
    }

    /// Whether a response with `status` should be retried.
    pub fn is_retryable_status(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::TOO_MANY_REQUESTS
                | StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_policy_retries_three_times() {
        assert_eq!(RetryPolicy::standard().max_retries(), 3);
        assert_eq!(RetryPolicy::default().max_retries(), 3);
    }

    #[test]
    fn none_policy_never_retries() {
        assert_eq!(RetryPolicy::none().max_retries(), 0);
    }

    #[test]
    fn retryable_statuses() {
        assert!(RetryPolicy::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(RetryPolicy::is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(RetryPolicy::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(RetryPolicy::is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(RetryPolicy::is_retryable_status(StatusCode::GATEWAY_TIMEOUT));

        assert!(!RetryPolicy::is_retryable_status(StatusCode::OK));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::CONFLICT));
    }

    #[test]
    fn invalid_backoff_is_rejected() {
        let result = RetryPolicy::new(Duration::from_secs(10), Duration::from_secs(1), 3);
        assert!(result.is_err());
    }
}
