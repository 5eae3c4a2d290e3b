//! Cooldown-gated alert decisions.

use std::time::{Duration, Instant};

use crate::verdict::tracker::Transition;

/// Decides whether a permitted alert may be emitted now.
///
/// Owns the record of the last permitted alert; constructed once per
/// monitoring session.
#[derive(Debug)]
pub struct AlertGate {
    cooldown: Duration,
    last_sent_at: Option<Instant>,
}

impl AlertGate {
    /// Create a gate with the given cooldown window. A zero window
    /// permits every qualifying event.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_sent_at: None,
        }
    }

    /// Threshold-mode decision: alert only on [`Transition::WentDown`],
    /// and only outside the cooldown window.
    pub fn should_alert(&mut self, transition: Transition, now: Instant) -> bool {
        match transition {
            Transition::Recovered => false,
            Transition::WentDown => self.acquire(now),
        }
    }

    /// Consume the cooldown if it is open.
    ///
    /// On `true` the gate records `now` as the last alert time before the
    /// caller attempts delivery; overlapping evaluations cannot double-fire
    /// and a failed send does not reopen the window. Burst-mode callers use
    /// this directly since each run's verdict has no transition to suppress.
    pub fn acquire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_sent_at {
            if self.cooldown > Duration::ZERO && now.duration_since(last) < self.cooldown {
                return false;
            }
        }
        self.last_sent_at = Some(now);
        true
    }

    /// When the last alert was permitted, if any.
    pub fn last_sent_at(&self) -> Option<Instant> {
        self.last_sent_at
    }
}
