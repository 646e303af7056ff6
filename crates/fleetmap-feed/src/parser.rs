//! Feed payload normalization.
//!
//! The backend's payloads are loosely typed: ids arrive as strings or
//! numbers, coordinates as numbers or numeric strings. Normalization
//! is forgiving at the payload level and strict at the entry level:
//!
//! - A payload that is not a JSON array normalizes to an empty
//!   sequence for that feed. The two feeds are normalized
//!   independently, so a malformed relay payload never suppresses a
//!   healthy driver payload.
//! - An entry without an id or without a finite numeric position is
//!   dropped; the rest of the sequence is kept.

use fleetmap_core::{Driver, GeoPoint, RelayPoint};
use serde_json::Value;
use tracing::warn;

/// Result of normalizing one feed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFeed<T> {
    /// Entries that passed normalization, in payload order.
    pub entries: Vec<T>,
    /// Number of entries dropped for missing id or position.
    pub dropped: usize,
}

/// Normalize a relay-point payload.
pub fn normalize_relay_points(payload: &Value) -> NormalizedFeed<RelayPoint> {
    normalize_entries(payload, "relay_points", |id, position| {
        RelayPoint::new(id, position)
    })
}

/// Normalize a driver payload.
pub fn normalize_drivers(payload: &Value) -> NormalizedFeed<Driver> {
    normalize_entries(payload, "drivers", |id, position| Driver::new(id, position))
}

fn normalize_entries<T>(
    payload: &Value,
    feed: &str,
    make: impl Fn(String, GeoPoint) -> T,
) -> NormalizedFeed<T> {
    let items = match payload.as_array() {
        Some(items) => items,
        None => {
            warn!(feed, "Payload is not an array, normalizing to empty");
            return NormalizedFeed {
                entries: Vec::new(),
                dropped: 0,
            };
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut dropped = 0;

    for (idx, item) in items.iter().enumerate() {
        match parse_entry(item) {
            Some((id, position)) => entries.push(make(id, position)),
            None => {
                warn!(feed, idx, "Dropping entry without id or numeric position");
                dropped += 1;
            }
        }
    }

    NormalizedFeed { entries, dropped }
}

/// Extract (id, position) from one payload entry.
fn parse_entry(item: &Value) -> Option<(String, GeoPoint)> {
    let id = entry_id(item)?;
    let lat = numeric_field(item, "lat")?;
    let lng = numeric_field(item, "lng")?;

    let position = GeoPoint::new(lat, lng);
    if !position.is_finite() {
        return None;
    }

    Some((id, position))
}

/// Read the id, accepting strings and numbers.
fn entry_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a coordinate, accepting numbers and numeric strings.
fn numeric_field(item: &Value, key: &str) -> Option<f64> {
    match item.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
