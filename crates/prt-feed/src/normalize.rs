//! Feed-shape tolerance and normalization of raw features into
//! [`EventRecord`]s.

use prt_core::EventRecord;
use serde_json::Value;

use crate::error::FeedError;
use crate::types::FeedFeature;

/// Extract the ordered event-feature sequence from a feed document.
///
/// The upstream feed has shipped three shapes across versions without
/// notice; they are checked in order, first match wins:
/// 1. a bare array of features,
/// 2. `{"features": [...]}`,
/// 3. `{"events": {"features": [...]}}`.
///
/// # Errors
///
/// Returns [`FeedError::Schema`] for any other shape.
pub fn event_features(document: &Value) -> Result<&[Value], FeedError> {
    if let Value::Array(features) = document {
        return Ok(features);
    }
    if let Some(Value::Array(features)) = document.get("features") {
        return Ok(features);
    }
    if let Some(Value::Array(features)) = document.get("events").and_then(|e| e.get("features")) {
        return Ok(features);
    }
    Err(FeedError::Schema("unexpected JSON structure".to_string()))
}

/// Convert a raw [`FeedFeature`] into the shared [`EventRecord`],
/// applying the feed's defaulting rules: free-text fields default to
/// empty, missing coordinate components default to `0.0`, and a missing
/// name stays `None` for the renderer to substitute.
#[must_use]
pub fn normalize_event(feature: FeedFeature) -> EventRecord {
    let coordinates = feature.geometry.map_or_else(Vec::new, |g| g.coordinates);
    let longitude = coordinates.first().copied().unwrap_or(0.0);
    let latitude = coordinates.get(1).copied().unwrap_or(0.0);

    EventRecord {
        id: feature.id.and_then(|id| match id {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }),
        name: feature.properties.eventname,
        long_name: feature.properties.event_long_name,
        location: feature.properties.event_location.unwrap_or_default(),
        description: feature.properties.event_description.unwrap_or_default(),
        coordinates: (longitude, latitude),
    }
}
