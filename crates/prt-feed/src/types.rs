//! Raw serde types for the upstream events feed.
//!
//! The feed is GeoJSON-flavored: each event is a feature carrying a
//! `properties` object and a `geometry` with a coordinate array. Property
//! names follow the feed's mixed-case convention (`eventname` but
//! `EventLongName`), so the renames are load-bearing.

use serde::Deserialize;

/// One feature from the events feed.
///
/// Every field is defaulted so that sparse features still deserialize; a
/// feature only fails when a present field has the wrong type (e.g.
/// `properties` is a string), which the orchestrator treats as a
/// per-event failure.
#[derive(Debug, Deserialize)]
pub struct FeedFeature {
    /// Feature-level identifier, if the feed carries one. Kept opaque.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub properties: FeedProperties,
    #[serde(default)]
    pub geometry: Option<FeedGeometry>,
}

/// The `properties` object of a feed feature.
#[derive(Debug, Default, Deserialize)]
pub struct FeedProperties {
    #[serde(default)]
    pub eventname: Option<String>,
    #[serde(default, rename = "EventLongName")]
    pub event_long_name: Option<String>,
    #[serde(default, rename = "EventLocation")]
    pub event_location: Option<String>,
    #[serde(default, rename = "EventDescription")]
    pub event_description: Option<String>,
}

/// The `geometry` object of a feed feature.
#[derive(Debug, Deserialize)]
pub struct FeedGeometry {
    /// `[longitude, latitude]`; shorter (or empty) arrays are tolerated
    /// and missing components default to `0.0` during normalization.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}
