//! Threshold-mode monitor loop.

use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tokio::time;

use crate::alert::AlertGate;
use crate::config::schema::MonitorConfig;
use crate::monitor::down_message;
use crate::notify::Notifier;
use crate::probe::HttpProber;
use crate::verdict::tracker::{HealthTracker, Transition};

/// Long-running monitor: one probe per interval, alert on sustained
/// outage, log recoveries.
pub struct ThresholdMonitor {
    prober: HttpProber,
    tracker: HealthTracker,
    gate: AlertGate,
    notifier: Box<dyn Notifier>,
    check_interval: Duration,
}

impl ThresholdMonitor {
    /// Assemble the monitor from configuration.
    pub fn new(config: &MonitorConfig, notifier: Box<dyn Notifier>) -> Self {
        Self {
            prober: HttpProber::new(
                config.target_url.clone(),
                Duration::from_millis(config.probe.timeout_ms),
            ),
            tracker: HealthTracker::new(config.threshold.failure_threshold),
            gate: AlertGate::new(Duration::from_millis(config.alert.cooldown_ms)),
            notifier,
            check_interval: Duration::from_millis(config.threshold.check_interval_ms),
        }
    }

    /// Run until the shutdown signal. The first probe fires immediately;
    /// nothing that happens inside one iteration terminates the loop.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            target = %self.prober.target(),
            interval_ms = self.check_interval.as_millis() as u64,
            "monitor starting"
        );

        let mut ticker = time::interval(self.check_interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check_once().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn check_once(&mut self) {
        let outcome = self.prober.probe().await;
        let transition = self.tracker.observe(&outcome);

        if !outcome.succeeded {
            tracing::info!(
                target = %self.prober.target(),
                reason = %outcome.reason,
                consecutive_failures = self.tracker.consecutive_failures(),
                "probe failed"
            );
        }

        let transition = match transition {
            Some(transition) => transition,
            None => return,
        };

        match transition {
            Transition::WentDown => {
                tracing::warn!(
                    target = %self.prober.target(),
                    consecutive_failures = self.tracker.consecutive_failures(),
                    "target went down"
                );
            }
            Transition::Recovered => {
                tracing::info!(target = %self.prober.target(), "target recovered");
            }
        }

        if self.gate.should_alert(transition, Instant::now()) {
            match self.notifier.send(&down_message(self.prober.target())).await {
                Ok(()) => {
                    tracing::info!(target = %self.prober.target(), "alert delivered");
                }
                Err(e) => {
                    // Monitoring continues; the cooldown stays consumed.
                    tracing::error!(target = %self.prober.target(), error = %e, "alert delivery failed");
                }
            }
        } else if transition == Transition::WentDown {
            tracing::info!(target = %self.prober.target(), "alert suppressed by cooldown");
        }
    }
}
