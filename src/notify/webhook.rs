//! Webhook notification transport.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::notify::{confirm_delivery, Notifier, NotifyError};

/// Delivers alerts by POSTing a JSON payload to a webhook URL.
///
/// The payload shape (`{"content": ...}`) is what Discord-compatible
/// webhooks accept.
pub struct WebhookNotifier {
    client: Client,
    endpoint: Url,
}

impl WebhookNotifier {
    /// Create a notifier for the given webhook endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "content": message }))
            .send()
            .await?;

        confirm_delivery(response).await
    }
}
