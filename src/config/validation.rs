//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntactic)
//! - Check a complete notification transport exists
//! - Validate value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: MonitorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic violation in the assembled configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("TARGET_URL must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("no notification transport configured: set WEBHOOK_URL, or BOT_TOKEN and BOT_CHANNEL_ID")]
    NoNotifier,

    #[error("BOT_TOKEN and BOT_CHANNEL_ID must be set together")]
    IncompleteBotCredentials,

    #[error("FAILURE_THRESHOLD must be at least 1")]
    ZeroFailureThreshold,

    #[error("CHECK_INTERVAL_MS must be greater than zero")]
    ZeroCheckInterval,

    #[error("BURST_PROBE_COUNT must be at least 1")]
    ZeroBurstCount,

    #[error("PROBE_TIMEOUT_MS must be greater than zero")]
    ZeroProbeTimeout,
}

/// Validate an assembled configuration, collecting every violation.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let scheme = config.target_url.scheme();
    if scheme != "http" && scheme != "https" {
        errors.push(ValidationError::UnsupportedScheme(scheme.to_string()));
    }

    let has_webhook = config.notifier.webhook_url.is_some();
    let has_token = config.notifier.bot_token.is_some();
    let has_channel = config.notifier.bot_channel_id.is_some();
    if !has_webhook {
        if !has_token && !has_channel {
            errors.push(ValidationError::NoNotifier);
        } else if has_token != has_channel {
            errors.push(ValidationError::IncompleteBotCredentials);
        }
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }
    if config.threshold.failure_threshold == 0 {
        errors.push(ValidationError::ZeroFailureThreshold);
    }
    if config.threshold.check_interval_ms == 0 {
        errors.push(ValidationError::ZeroCheckInterval);
    }
    if config.burst.probe_count == 0 {
        errors.push(ValidationError::ZeroBurstCount);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
