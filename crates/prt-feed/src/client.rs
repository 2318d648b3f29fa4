//! HTTP client for the event feed.
//!
//! Wraps `reqwest` with feed-specific error handling. The feed is a single
//! JSON document fetched by GET; shape tolerance and normalization live in
//! [`crate::normalize`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FeedError;

/// Client for the event feed endpoint.
///
/// Holds the HTTP client and the resolved feed URL. Point it at a mock
/// server in tests by passing the mock's URI to [`FeedClient::new`].
#[derive(Debug)]
pub struct FeedClient {
    client: Client,
    feed_url: Url,
}

impl FeedClient {
    /// Creates a new client for the given feed URL.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `feed_url` does not parse, or
    /// [`FeedError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(feed_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let feed_url = Url::parse(feed_url).map_err(|e| FeedError::InvalidUrl {
            url: feed_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, feed_url })
    }

    /// Fetches the feed and parses the body as JSON.
    ///
    /// The document is returned untyped; callers pass it through
    /// [`crate::normalize::event_features`] to locate the feature array.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] on network failure or a non-2xx status.
    /// Returns [`FeedError::Parse`] if the body is not valid JSON.
    pub async fn fetch_document(&self) -> Result<serde_json::Value, FeedError> {
        let response = self.client.get(self.feed_url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Parse {
            context: self.feed_url.to_string(),
            source: e,
        })
    }
}
