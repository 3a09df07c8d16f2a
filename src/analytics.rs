//! Analytics records and the sink they are pushed to.
//!
//! In the browser the sink is `window.dataLayer`, an append-only array read by
//! the tag manager. Records serialize as flat JSON objects: the event name
//! under `"event"` followed by the payload keys. A payload key named `event`
//! is written after the name and so replaces it once parsed.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Attribute naming the event a clickable node emits.
pub const TRACK_ATTRIBUTE: &str = "data-track";

/// One structured record, e.g. `{"event": "scroll_75"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(event: impl Into<String>) -> Self {
        Self { event: event.into(), payload: Map::new() }
    }

    /// Add a string payload field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(key.into(), Value::String(value.into()));
        self
    }
}

/// Append-only destination for analytics records.
pub trait EventSink {
    fn push(&mut self, event: &AnalyticsEvent);
}

/// In-memory sink that keeps records in append order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<AnalyticsEvent>,
}

impl EventSink for MemorySink {
    fn push(&mut self, event: &AnalyticsEvent) {
        self.events.push(event.clone());
    }
}

/// Build the event for a click on a `[data-track]` node.
///
/// `attributes` are the node's `(name, value)` pairs. Every `data-*`
/// attribute other than `data-track` becomes a payload field with a camelCase
/// key. Returns `None` when the track attribute is missing or empty.
#[must_use]
pub fn tracked_click(attributes: &[(String, String)]) -> Option<AnalyticsEvent> {
    let name = attributes
        .iter()
        .find(|(key, _)| key == TRACK_ATTRIBUTE)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())?;

    let mut event = AnalyticsEvent::new(name);
    for (key, value) in attributes {
        if let Some(field) = data_attribute_key(key) {
            event.payload.insert(field, Value::String(value.clone()));
        }
    }
    Some(event)
}

/// Map a `data-foo-bar` attribute name to its `fooBar` payload key.
///
/// A hyphen is dropped only when followed by a lowercase ASCII letter, which
/// is then uppercased; `data-step-2` stays `step-2`.
#[must_use]
pub fn data_attribute_key(attribute: &str) -> Option<String> {
    if attribute == TRACK_ATTRIBUTE {
        return None;
    }
    let rest = attribute.strip_prefix("data-")?;

    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                key.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => key.push(c),
        }
    }
    Some(key)
}
