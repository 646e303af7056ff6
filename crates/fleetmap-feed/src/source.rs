//! Data-source seam for the position backend.
//!
//! `FeedSource` abstracts the two read endpoints so the view core can
//! be driven by the real HTTP backend in production and by scripted
//! doubles in tests. Fetches return raw JSON: normalization is the
//! reconciler's concern, and a delivered-but-malformed payload must
//! not be conflated with a transport failure.

use crate::error::{FeedError, FeedResult};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Relay-point feed path on the backend.
const RELAY_POINTS_PATH: &str = "/relay-points";

/// Driver feed path on the backend.
const DRIVERS_PATH: &str = "/drivers";

/// A source of the two polled feeds.
///
/// Each call returns either a well-formed JSON document or a
/// `FeedError`; ordering stability and pagination are not assumed.
pub trait FeedSource: Send + Sync + 'static {
    /// Fetch the relay-point feed.
    fn fetch_relay_points(&self) -> impl Future<Output = FeedResult<Value>> + Send;

    /// Fetch the driver feed.
    fn fetch_drivers(&self) -> impl Future<Output = FeedResult<Value>> + Send;
}

/// HTTP implementation of [`FeedSource`].
pub struct HttpFeedSource {
    /// HTTP client.
    client: Client,
    /// Relay-point endpoint URL.
    relay_url: String,
    /// Driver endpoint URL.
    driver_url: String,
}

impl HttpFeedSource {
    /// Create a new source against a backend base URL with the
    /// default request timeout.
    ///
    /// # Arguments
    /// * `base_url` - Backend root (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: impl AsRef<str>) -> FeedResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new source with an explicit request timeout.
    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        let base = base_url.as_ref().trim_end_matches('/');

        Ok(Self {
            client,
            relay_url: format!("{base}{RELAY_POINTS_PATH}"),
            driver_url: format!("{base}{DRIVERS_PATH}"),
        })
    }

    /// Fetch one endpoint as raw JSON.
    async fn fetch_json(&self, url: &str) -> FeedResult<Value> {
        debug!(url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Http(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Http(format!("HTTP {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| FeedError::Decode(format!("Failed to parse response: {e}")))
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch_relay_points(&self) -> FeedResult<Value> {
        self.fetch_json(&self.relay_url).await
    }

    async fn fetch_drivers(&self) -> FeedResult<Value> {
        self.fetch_json(&self.driver_url).await
    }
}
