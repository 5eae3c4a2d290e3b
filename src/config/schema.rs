//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// The endpoint whose availability is watched.
    pub target_url: Url,

    /// Notification transport settings.
    pub notifier: NotifierConfig,

    /// Probe settings shared by both modes.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Threshold-mode settings.
    #[serde(default)]
    pub threshold: ThresholdConfig,

    /// Burst-mode settings.
    #[serde(default)]
    pub burst: BurstConfig,

    /// Alert suppression settings.
    #[serde(default)]
    pub alert: AlertConfig,
}

/// Notification transport selection.
///
/// Exactly one transport must be complete: a webhook URL, or a bot token
/// together with a channel id. When both are present the webhook wins.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Webhook endpoint.
    pub webhook_url: Option<Url>,

    /// Bot credential.
    pub bot_token: Option<String>,

    /// Channel the bot posts into.
    pub bot_channel_id: Option<String>,
}

/// Probe settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Hard per-probe timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_ms: 10_000 }
    }
}

/// Threshold-mode settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Consecutive failures before the target is declared down.
    pub failure_threshold: u32,

    /// Interval between probes in milliseconds.
    pub check_interval_ms: u64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            check_interval_ms: 60_000,
        }
    }
}

/// Burst-mode settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Number of probes per invocation.
    pub probe_count: u32,

    /// Delay between probes inside a burst in milliseconds.
    pub inter_probe_delay_ms: u64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            probe_count: 3,
            inter_probe_delay_ms: 2_000,
        }
    }
}

/// Alert suppression settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Minimum spacing between permitted alerts in milliseconds.
    /// Zero disables the cooldown.
    pub cooldown_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 300_000,
        }
    }
}
