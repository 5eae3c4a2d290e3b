//! Whole-burst classification.

use crate::probe::outcome::ProbeOutcome;

/// Self-contained verdict for one burst run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstVerdict {
    /// Every probe in the burst succeeded.
    Healthy,
    /// At least one probe failed.
    Down { failed: usize, total: usize },
}

/// Classify a finished burst. Any failure makes the whole run `Down`.
pub fn classify(outcomes: &[ProbeOutcome]) -> BurstVerdict {
    let failed = outcomes.iter().filter(|o| !o.succeeded).count();
    if failed == 0 {
        BurstVerdict::Healthy
    } else {
        BurstVerdict::Down {
            failed,
            total: outcomes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_successes_is_healthy() {
        let outcomes = vec![
            ProbeOutcome::success(200),
            ProbeOutcome::success(200),
            ProbeOutcome::success(301),
        ];
        assert_eq!(classify(&outcomes), BurstVerdict::Healthy);
    }

    #[test]
    fn test_single_failure_is_down() {
        let outcomes = vec![
            ProbeOutcome::success(200),
            ProbeOutcome::timed_out(),
            ProbeOutcome::success(200),
        ];
        assert_eq!(
            classify(&outcomes),
            BurstVerdict::Down { failed: 1, total: 3 }
        );
    }

    #[test]
    fn test_all_failures_is_down() {
        let outcomes = vec![
            ProbeOutcome::network_failure(),
            ProbeOutcome::http_failure(500),
        ];
        assert_eq!(
            classify(&outcomes),
            BurstVerdict::Down { failed: 2, total: 2 }
        );
    }
}
