//! Configuration loading from the environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{
    AlertConfig, BurstConfig, MonitorConfig, NotifierConfig, ProbeConfig, ThresholdConfig,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },

    /// The assembled configuration is semantically invalid.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from process environment variables.
pub fn load_from_env() -> Result<MonitorConfig, ConfigError> {
    load_with(|name| env::var(name).ok())
}

/// Load and validate configuration from an arbitrary variable lookup.
///
/// `load_from_env` is this over [`std::env::var`]; tests supply a map.
pub fn load_with<F>(get: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let target_url = parse_url("TARGET_URL", required(&get, "TARGET_URL")?)?;

    let notifier = NotifierConfig {
        webhook_url: optional(&get, "WEBHOOK_URL")
            .map(|raw| parse_url("WEBHOOK_URL", raw))
            .transpose()?,
        bot_token: optional(&get, "BOT_TOKEN"),
        bot_channel_id: optional(&get, "BOT_CHANNEL_ID"),
    };

    let probe_defaults = ProbeConfig::default();
    let threshold_defaults = ThresholdConfig::default();
    let burst_defaults = BurstConfig::default();
    let alert_defaults = AlertConfig::default();

    let config = MonitorConfig {
        target_url,
        notifier,
        probe: ProbeConfig {
            timeout_ms: parsed(&get, "PROBE_TIMEOUT_MS", probe_defaults.timeout_ms)?,
        },
        threshold: ThresholdConfig {
            failure_threshold: parsed(
                &get,
                "FAILURE_THRESHOLD",
                threshold_defaults.failure_threshold,
            )?,
            check_interval_ms: parsed(
                &get,
                "CHECK_INTERVAL_MS",
                threshold_defaults.check_interval_ms,
            )?,
        },
        burst: BurstConfig {
            probe_count: parsed(&get, "BURST_PROBE_COUNT", burst_defaults.probe_count)?,
            inter_probe_delay_ms: parsed(
                &get,
                "INTER_PROBE_DELAY_MS",
                burst_defaults.inter_probe_delay_ms,
            )?,
        },
        alert: AlertConfig {
            cooldown_ms: parsed(&get, "ALERT_COOLDOWN_MS", alert_defaults.cooldown_ms)?,
        },
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// A set variable, trimmed; empty counts as unset.
fn optional<F>(get: &F, name: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    get(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(get: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(get, name).ok_or(ConfigError::MissingVar(name))
}

fn parse_url(var: &'static str, raw: String) -> Result<Url, ConfigError> {
    Url::parse(&raw).map_err(|e| ConfigError::InvalidVar {
        var,
        message: e.to_string(),
    })
}

fn parsed<F, T>(get: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(get, name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            var: name,
            message: e.to_string(),
        }),
    }
}
