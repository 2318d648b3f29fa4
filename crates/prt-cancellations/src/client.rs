//! HTTP client for the wiki's cancellations page.
//!
//! The wiki intermittently answers with non-success statuses under load,
//! so fetches retry on bad status with a fixed delay between attempts.
//! Transport-level failures are returned immediately.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CancellationsError;

/// Client for the cancellations wiki page.
#[derive(Debug)]
pub struct CancellationsClient {
    client: Client,
    page_url: Url,
    max_retries: u32,
    retry_delay: Duration,
}

impl CancellationsClient {
    /// Creates a new client for the given page URL.
    ///
    /// `max_retries` is the number of additional attempts after the
    /// first; `retry_delay_secs` is the fixed pause between attempts.
    ///
    /// # Errors
    ///
    /// Returns [`CancellationsError::InvalidUrl`] if `page_url` does not
    /// parse, or [`CancellationsError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        page_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, CancellationsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let page_url = Url::parse(page_url).map_err(|e| CancellationsError::InvalidUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            page_url,
            max_retries,
            retry_delay: Duration::from_secs(retry_delay_secs),
        })
    }

    /// Fetches the page body as HTML, retrying on non-success statuses.
    ///
    /// # Errors
    ///
    /// Returns [`CancellationsError::Http`] on a transport failure and
    /// [`CancellationsError::Exhausted`] once every attempt has come back
    /// with a non-success status.
    pub async fn fetch_page(&self) -> Result<String, CancellationsError> {
        let mut attempt = 0u32;
        loop {
            let response = self.client.get(self.page_url.clone()).send().await?;
            let status = response.status();
            if status.is_success() {
                return Ok(response.text().await?);
            }

            if attempt >= self.max_retries {
                return Err(CancellationsError::Exhausted {
                    url: self.page_url.to_string(),
                    attempts: attempt + 1,
                });
            }
            attempt += 1;
            tracing::warn!(
                attempt,
                max_retries = self.max_retries,
                status = %status,
                "non-success status from cancellations page, retrying after delay"
            );
            tokio::time::sleep(self.retry_delay).await;
        }
    }
}
