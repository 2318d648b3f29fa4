//! Extension point for replacing feed descriptions with richer text.

/// Supplies an optional replacement description for an event, keyed by
/// the event's name.
///
/// The renderer consults this only when the feed already carries a
/// meaningful description, and only adopts the result when it is longer
/// than 50 characters. Implementations backed by a remote source should
/// resolve their lookups ahead of rendering; the renderer itself stays
/// synchronous.
pub trait DescriptionSource {
    /// Returns replacement text for `event_name`, or `None` to keep the
    /// feed's own description.
    fn describe(&self, event_name: &str) -> Option<String>;
}

/// The default source: never supplies a replacement.
pub struct NoEnrichment;

impl DescriptionSource for NoEnrichment {
    fn describe(&self, _event_name: &str) -> Option<String> {
        None
    }
}
