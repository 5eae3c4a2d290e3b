//! Consecutive-failure health tracking.
//!
//! # State Transitions
//! ```text
//! Up → Down: consecutive failures reach failure_threshold
//! Down → Up: first success after being down
//! ```
//!
//! Counters reset on any success; transitions are edge-triggered.

use crate::probe::outcome::ProbeOutcome;

/// A change in the derived health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Consecutive failures first reached the threshold.
    WentDown,
    /// First success after a down episode.
    Recovered,
}

/// Tracks the health verdict for one target across a monitoring session.
///
/// Single logical owner; constructed once per session and mutated only
/// through [`observe`](HealthTracker::observe).
#[derive(Debug)]
pub struct HealthTracker {
    failure_threshold: u32,
    consecutive_failures: u32,
    currently_down: bool,
}

impl HealthTracker {
    /// Create a tracker that declares the target down after
    /// `failure_threshold` consecutive failures.
    pub fn new(failure_threshold: u32) -> Self {
        Self {
            failure_threshold,
            consecutive_failures: 0,
            currently_down: false,
        }
    }

    /// Feed one outcome through the state machine.
    ///
    /// Returns a transition only when the verdict actually changed:
    /// [`Transition::WentDown`] exactly once per down episode, and
    /// [`Transition::Recovered`] on the first success afterwards.
    pub fn observe(&mut self, outcome: &ProbeOutcome) -> Option<Transition> {
        if outcome.succeeded {
            self.consecutive_failures = 0;
            if self.currently_down {
                self.currently_down = false;
                return Some(Transition::Recovered);
            }
            None
        } else {
            self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            if !self.currently_down && self.consecutive_failures >= self.failure_threshold {
                self.currently_down = true;
                return Some(Transition::WentDown);
            }
            None
        }
    }

    /// Length of the trailing run of failures.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Whether the target is currently considered down.
    pub fn is_down(&self) -> bool {
        self.currently_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::outcome::ProbeOutcome;

    fn ok() -> ProbeOutcome {
        ProbeOutcome::success(200)
    }

    fn fail() -> ProbeOutcome {
        ProbeOutcome::http_failure(500)
    }

    #[test]
    fn test_went_down_fires_exactly_once_at_threshold() {
        let mut tracker = HealthTracker::new(3);
        assert_eq!(tracker.observe(&fail()), None);
        assert_eq!(tracker.observe(&fail()), None);
        assert_eq!(tracker.observe(&fail()), Some(Transition::WentDown));
        // Further failures keep accumulating silently.
        assert_eq!(tracker.observe(&fail()), None);
        assert_eq!(tracker.observe(&fail()), None);
        assert!(tracker.is_down());
        assert_eq!(tracker.consecutive_failures(), 5);
    }

    #[test]
    fn test_success_resets_count() {
        let mut tracker = HealthTracker::new(3);
        tracker.observe(&fail());
        tracker.observe(&fail());
        assert_eq!(tracker.observe(&ok()), None);
        assert_eq!(tracker.consecutive_failures(), 0);
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_recovered_fires_once_per_episode() {
        let mut tracker = HealthTracker::new(2);
        tracker.observe(&fail());
        assert_eq!(tracker.observe(&fail()), Some(Transition::WentDown));
        assert_eq!(tracker.observe(&ok()), Some(Transition::Recovered));
        assert_eq!(tracker.observe(&ok()), None);
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_second_episode_fires_again() {
        let mut tracker = HealthTracker::new(2);
        tracker.observe(&fail());
        assert_eq!(tracker.observe(&fail()), Some(Transition::WentDown));
        assert_eq!(tracker.observe(&ok()), Some(Transition::Recovered));
        tracker.observe(&fail());
        assert_eq!(tracker.observe(&fail()), Some(Transition::WentDown));
    }

    #[test]
    fn test_count_equals_trailing_failure_run() {
        let mut tracker = HealthTracker::new(10);
        let sequence = [true, false, false, true, false, false, false];
        for succeeded in sequence {
            let outcome = if succeeded { ok() } else { fail() };
            tracker.observe(&outcome);
        }
        assert_eq!(tracker.consecutive_failures(), 3);

        tracker.observe(&ok());
        assert_eq!(tracker.consecutive_failures(), 0);
    }

    #[test]
    fn test_failure_reasons_count_identically() {
        let mut tracker = HealthTracker::new(3);
        tracker.observe(&ProbeOutcome::timed_out());
        tracker.observe(&ProbeOutcome::network_failure());
        assert_eq!(
            tracker.observe(&ProbeOutcome::http_failure(502)),
            Some(Transition::WentDown)
        );
    }

    #[test]
    fn test_threshold_of_one() {
        let mut tracker = HealthTracker::new(1);
        assert_eq!(tracker.observe(&fail()), Some(Transition::WentDown));
        assert_eq!(tracker.observe(&ok()), Some(Transition::Recovered));
    }
}
