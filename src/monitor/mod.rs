//! Scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! Threshold mode (daemon.rs):
//!     interval tick → probe → tracker → transition? → gate → notifier
//!     runs until shutdown; no iteration failure stops it
//!
//! Burst mode (burst.rs):
//!     N probes with inter-probe delay → classify → gate → notifier
//!     one shot; the result maps to the process exit code
//! ```
//!
//! # Design Decisions
//! - One logical task; probes and sends are strictly sequential
//! - First threshold-mode probe fires immediately at startup
//! - A failed alert delivery never halts future health checks

pub mod burst;
pub mod daemon;

use url::Url;

pub use burst::{BurstOutcome, BurstRunner};
pub use daemon::ThresholdMonitor;

/// Alert line for a sustained outage.
pub(crate) fn down_message(target: &Url) -> String {
    format!("Target is down: {target}")
}

/// Alert line for a failed burst, naming how many probes failed.
pub(crate) fn burst_down_message(target: &Url, failed: usize, total: usize) -> String {
    format!("Target is down: {target} ({failed}/{total} probes failed)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_target() {
        let target = Url::parse("https://example.com/health").unwrap();
        assert_eq!(
            down_message(&target),
            "Target is down: https://example.com/health"
        );
        assert_eq!(
            burst_down_message(&target, 2, 3),
            "Target is down: https://example.com/health (2/3 probes failed)"
        );
    }
}
