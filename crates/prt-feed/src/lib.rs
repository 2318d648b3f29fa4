pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::FeedClient;
pub use error::FeedError;
pub use normalize::{event_features, normalize_event};
pub use types::{FeedFeature, FeedGeometry, FeedProperties};
