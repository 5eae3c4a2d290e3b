//! Probe outcome model.

use chrono::{DateTime, Utc};

/// Classification of a probe failure.
///
/// The verdict tracker treats all failure classes identically; the
/// distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The probe succeeded.
    None,
    /// No response arrived within the configured timeout.
    Timeout,
    /// Transport-level failure (DNS, connection refused, reset).
    Network,
    /// A response arrived with a non-2xx/3xx status.
    Http,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::None => write!(f, "none"),
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::Network => write!(f, "network error"),
            FailureReason::Http => write!(f, "http error"),
        }
    }
}

/// The normalized result of a single probe.
///
/// Immutable, created fresh per attempt.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// Whether the target answered with an acceptable status.
    pub succeeded: bool,
    /// HTTP status code, when a response was received at all.
    pub status_code: Option<u16>,
    /// Failure classification; `None` on success.
    pub reason: FailureReason,
    /// When the probe completed.
    pub timestamp: DateTime<Utc>,
}

impl ProbeOutcome {
    /// A probe that received an acceptable (2xx/3xx) response.
    pub fn success(status_code: u16) -> Self {
        Self {
            succeeded: true,
            status_code: Some(status_code),
            reason: FailureReason::None,
            timestamp: Utc::now(),
        }
    }

    /// A probe that received a rejected (non-2xx/3xx) response.
    pub fn http_failure(status_code: u16) -> Self {
        Self {
            succeeded: false,
            status_code: Some(status_code),
            reason: FailureReason::Http,
            timestamp: Utc::now(),
        }
    }

    /// A probe that failed at the transport level before any response.
    pub fn network_failure() -> Self {
        Self {
            succeeded: false,
            status_code: None,
            reason: FailureReason::Network,
            timestamp: Utc::now(),
        }
    }

    /// A probe whose response never arrived within the timeout.
    pub fn timed_out() -> Self {
        Self {
            succeeded: false,
            status_code: None,
            reason: FailureReason::Timeout,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_status() {
        let outcome = ProbeOutcome::success(204);
        assert!(outcome.succeeded);
        assert_eq!(outcome.status_code, Some(204));
        assert_eq!(outcome.reason, FailureReason::None);
    }

    #[test]
    fn test_http_failure_carries_status() {
        let outcome = ProbeOutcome::http_failure(503);
        assert!(!outcome.succeeded);
        assert_eq!(outcome.status_code, Some(503));
        assert_eq!(outcome.reason, FailureReason::Http);
    }

    #[test]
    fn test_timeout_and_network_have_no_status() {
        assert_eq!(ProbeOutcome::timed_out().status_code, None);
        assert_eq!(ProbeOutcome::network_failure().status_code, None);
    }
}
