//! Notification subsystem.
//!
//! # Responsibilities
//! - Deliver a single human-readable alert line to a chat channel
//! - Confirm delivery; a send is only "sent" once acknowledged
//!
//! # Design Decisions
//! - One capability trait with one method; transport choice is a
//!   configuration-selected adapter
//! - Webhook transport: plain POST to the webhook URL
//! - Bot transport: channel-message endpoint with a bot token
//! - Rejected responses surface status and body to the caller

pub mod bot;
pub mod webhook;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::schema::NotifierConfig;

pub use bot::BotNotifier;
pub use webhook::WebhookNotifier;

/// Errors that can occur while delivering a notification.
///
/// Failure to alert is more severe than failure to reach the target: it
/// breaks the observability guarantee, so callers must see it.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The transport itself failed (DNS, connection, TLS, timeout).
    #[error("notification transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered but refused the message.
    #[error("notification rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The configured credential cannot be sent at all.
    #[error("bot token is not a valid header value")]
    InvalidCredential,
}

/// A channel that can deliver one alert message.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message`. `Ok` means acknowledged delivery.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Select the transport adapter the configuration describes.
///
/// Returns `None` when no complete transport is configured; validation
/// normally rejects that before this point.
pub fn from_config(config: &NotifierConfig) -> Option<Box<dyn Notifier>> {
    if let Some(url) = &config.webhook_url {
        return Some(Box::new(WebhookNotifier::new(url.clone())));
    }
    match (&config.bot_token, &config.bot_channel_id) {
        (Some(token), Some(channel_id)) => {
            Some(Box::new(BotNotifier::new(token.clone(), channel_id.clone())))
        }
        _ => None,
    }
}

/// Map a transport response to a delivery result, capturing the body of
/// rejected responses for the log.
pub(crate) async fn confirm_delivery(response: reqwest::Response) -> Result<(), NotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(NotifyError::Rejected {
        status: status.as_u16(),
        body,
    })
}
