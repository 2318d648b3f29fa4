//! Weekly cancellations scrape.
//!
//! Fetches the partner wiki's global cancellations page, pulls the
//! announcement table out of the HTML, and keeps the rows dated in the
//! current ISO week. The result feeds the site's `_data/cancellations.json`.

pub mod client;
pub mod error;
pub mod parse;
pub mod types;

pub use client::CancellationsClient;
pub use error::CancellationsError;
pub use parse::parse_cancellations;
pub use types::Cancellation;
