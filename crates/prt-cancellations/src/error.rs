use thiserror::Error;

/// Errors returned by the cancellations page client.
#[derive(Debug, Error)]
pub enum CancellationsError {
    /// Network or TLS failure from the underlying HTTP client. Transport
    /// failures are not retried; only non-success statuses are.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured page URL could not be parsed.
    #[error("invalid cancellations page URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Every attempt returned a non-success status.
    #[error("failed to fetch {url} after {attempts} attempts")]
    Exhausted { url: String, attempts: u32 },
}
