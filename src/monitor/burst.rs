//! Burst-mode one-shot runner.

use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::alert::AlertGate;
use crate::config::schema::MonitorConfig;
use crate::monitor::burst_down_message;
use crate::notify::Notifier;
use crate::probe::HttpProber;
use crate::verdict::burst::{classify, BurstVerdict};

/// How one burst invocation ended; the binary maps this to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstOutcome {
    /// Every probe succeeded; nothing to report.
    Healthy,
    /// The burst failed and the alert was acknowledged.
    DownAlertDelivered,
    /// The burst failed but the cooldown suppressed the alert.
    DownAlertSuppressed,
    /// The burst failed and the alert could not be delivered.
    DownAlertFailed,
}

impl BurstOutcome {
    /// Process exit code: non-zero only when the alert transport failed,
    /// distinguishing "down but reported" from "down and nobody knows".
    pub fn exit_code(&self) -> u8 {
        match self {
            BurstOutcome::DownAlertFailed => 1,
            _ => 0,
        }
    }
}

/// One-shot runner: a fixed count of probes, a whole-run verdict, at most
/// one alert attempt. No state survives between invocations.
pub struct BurstRunner {
    prober: HttpProber,
    gate: AlertGate,
    notifier: Box<dyn Notifier>,
    probe_count: u32,
    inter_probe_delay: Duration,
}

impl BurstRunner {
    /// Assemble the runner from configuration.
    pub fn new(config: &MonitorConfig, notifier: Box<dyn Notifier>) -> Self {
        Self {
            prober: HttpProber::new(
                config.target_url.clone(),
                Duration::from_millis(config.probe.timeout_ms),
            ),
            gate: AlertGate::new(Duration::from_millis(config.alert.cooldown_ms)),
            notifier,
            probe_count: config.burst.probe_count,
            inter_probe_delay: Duration::from_millis(config.burst.inter_probe_delay_ms),
        }
    }

    /// Run the burst to completion.
    pub async fn run(mut self) -> BurstOutcome {
        tracing::info!(
            target = %self.prober.target(),
            probes = self.probe_count,
            "starting burst check"
        );

        let mut outcomes = Vec::with_capacity(self.probe_count as usize);
        for attempt in 1..=self.probe_count {
            tracing::info!(attempt, total = self.probe_count, "probing");
            let outcome = self.prober.probe().await;
            if outcome.succeeded {
                tracing::info!(attempt, status = outcome.status_code, "probe ok");
            }
            outcomes.push(outcome);

            if attempt < self.probe_count {
                sleep(self.inter_probe_delay).await;
            }
        }

        let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
        tracing::info!(
            succeeded,
            failed = outcomes.len() - succeeded,
            total = outcomes.len(),
            "burst complete"
        );

        match classify(&outcomes) {
            BurstVerdict::Healthy => {
                tracing::info!(target = %self.prober.target(), "all probes succeeded, target healthy");
                BurstOutcome::Healthy
            }
            BurstVerdict::Down { failed, total } => {
                tracing::warn!(target = %self.prober.target(), failed, total, "target unhealthy");

                if !self.gate.acquire(Instant::now()) {
                    tracing::info!(target = %self.prober.target(), "alert suppressed by cooldown");
                    return BurstOutcome::DownAlertSuppressed;
                }

                let message = burst_down_message(self.prober.target(), failed, total);
                match self.notifier.send(&message).await {
                    Ok(()) => {
                        tracing::info!(target = %self.prober.target(), "alert delivered");
                        BurstOutcome::DownAlertDelivered
                    }
                    Err(e) => {
                        tracing::error!(target = %self.prober.target(), error = %e, "alert delivery failed");
                        BurstOutcome::DownAlertFailed
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(BurstOutcome::Healthy.exit_code(), 0);
        assert_eq!(BurstOutcome::DownAlertDelivered.exit_code(), 0);
        assert_eq!(BurstOutcome::DownAlertSuppressed.exit_code(), 0);
        assert_eq!(BurstOutcome::DownAlertFailed.exit_code(), 1);
    }
}
