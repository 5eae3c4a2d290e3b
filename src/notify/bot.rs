//! Bot-API notification transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use crate::notify::{confirm_delivery, Notifier, NotifyError};

/// Default chat API base URL.
const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Delivers alerts by posting a channel message through a bot account.
///
/// Functionally equivalent to the webhook transport; only the endpoint
/// and authentication differ.
pub struct BotNotifier {
    client: Client,
    token: String,
    channel_id: String,
    api_base: String,
}

impl BotNotifier {
    /// Create a notifier that posts to `channel_id` as the bot `token`.
    pub fn new(token: String, channel_id: String) -> Self {
        Self::with_api_base(token, channel_id, DEFAULT_API_BASE.to_string())
    }

    /// Same as [`new`](Self::new) against a non-default API host.
    pub fn with_api_base(token: String, channel_id: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            token,
            channel_id,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Notifier for BotNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let endpoint = format!(
            "{}/channels/{}/messages",
            self.api_base, self.channel_id
        );

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bot {}", self.token))
            .map_err(|_| NotifyError::InvalidCredential)?;
        headers.insert(AUTHORIZATION, auth);

        let response = self
            .client
            .post(endpoint)
            .headers(headers)
            .json(&serde_json::json!({ "content": message }))
            .send()
            .await?;

        confirm_delivery(response).await
    }
}
