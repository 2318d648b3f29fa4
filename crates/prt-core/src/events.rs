//! Shared event domain type produced by feed normalization.

/// A normalized running event, ready for page rendering.
///
/// Field defaults follow the feed's tolerance rules: a missing name is kept
/// as `None` (the renderer substitutes a placeholder), free-text fields
/// default to empty strings, and missing coordinate components default to
/// `0.0` so `coordinates` is always a full pair.
#[derive(Debug, Clone)]
pub struct EventRecord {
    /// Opaque identifier carried over from the source feed, if present.
    pub id: Option<String>,
    /// Short event name, used for slugs and widget queries.
    pub name: Option<String>,
    /// Display name; may carry a qualifier such as "junior".
    pub long_name: Option<String>,
    /// Free-text location description.
    pub location: String,
    /// Free-text description; may be empty or the upstream
    /// "No description available." sentinel.
    pub description: String,
    /// `(longitude, latitude)` in that order, matching the feed's
    /// GeoJSON-style layout.
    pub coordinates: (f64, f64),
}

impl EventRecord {
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.0
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.1
    }
}
