use thiserror::Error;

/// Errors returned by the events feed client and normalizer.
///
/// Every variant is fatal to a generation run: the feed is fetched
/// exactly once, with no retry, and a run without a feed writes nothing.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client, or a
    /// non-2xx response status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("JSON parse error for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but matches none of the accepted feed shapes.
    #[error("feed schema error: {0}")]
    Schema(String),

    /// The configured feed URL could not be parsed.
    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
