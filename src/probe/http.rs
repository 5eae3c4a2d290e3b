//! HTTP probing.
//!
//! # Responsibilities
//! - Perform one bounded-time GET against the target
//! - Classify the result into a ProbeOutcome
//! - Identify itself with a fixed User-Agent

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;
use tokio::time;
use url::Url;

use crate::probe::outcome::ProbeOutcome;

/// Identifying client signature sent with every probe.
pub const PROBE_USER_AGENT: &str =
    concat!("uptime-monitor-probe/", env!("CARGO_PKG_VERSION"));

/// Probes a single target with a hard per-request timeout.
pub struct HttpProber {
    client: Client,
    target: Url,
    timeout: Duration,
}

impl HttpProber {
    /// Create a prober for the given target.
    pub fn new(target: Url, timeout: Duration) -> Self {
        // Redirects stay unfollowed so 3xx statuses count as success as-is.
        let client = Client::builder()
            .user_agent(PROBE_USER_AGENT)
            .redirect(Policy::none())
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            target,
            timeout,
        }
    }

    /// The URL this prober checks.
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Perform one probe. Never fails; every path yields an outcome.
    pub async fn probe(&self) -> ProbeOutcome {
        let request = self.client.get(self.target.clone()).send();

        match time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => {
                let status = response.status();
                if status.is_success() || status.is_redirection() {
                    tracing::debug!(target = %self.target, status = %status, "probe ok");
                    ProbeOutcome::success(status.as_u16())
                } else {
                    tracing::warn!(
                        target = %self.target,
                        status = %status,
                        "probe failed: rejected status"
                    );
                    ProbeOutcome::http_failure(status.as_u16())
                }
            }
            Ok(Err(e)) => {
                tracing::warn!(target = %self.target, error = %e, "probe failed: connection error");
                ProbeOutcome::network_failure()
            }
            Err(_) => {
                // Dropping the request future aborts the in-flight request.
                tracing::warn!(
                    target = %self.target,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "probe failed: timeout"
                );
                ProbeOutcome::timed_out()
            }
        }
    }
}
