//! Shared domain types.
//!
//! `FeedSnapshot` is the only state the render layer reads. Its
//! sequences are never absent: "no data" is an empty sequence, and a
//! failed refresh keeps the previous entries alongside an `ErrorInfo`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// A fixed pickup/dropoff location on the map.
///
/// Identity is the `id`, not the array position, so the render layer
/// can key markers stably across refresh cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayPoint {
    pub id: String,
    pub position: GeoPoint,
}

impl RelayPoint {
    /// Create a new relay point.
    #[must_use]
    pub fn new(id: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// A driver currently reporting its location.
///
/// Same identity rule as [`RelayPoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub position: GeoPoint,
}

impl Driver {
    /// Create a new driver entry.
    #[must_use]
    pub fn new(id: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// The most recent fetch-cycle failure.
///
/// Set when a cycle fails, cleared on the next successful one. Does
/// not wipe previously fetched entries: stale-but-present data is
/// preferred over blanking the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorInfo {
    /// Create an error record stamped with the current time.
    #[must_use]
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Render-state snapshot produced by one reconciliation cycle.
///
/// Invariant: `relay_points` and `drivers` are always present
/// (possibly empty); only `error` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub relay_points: Vec<RelayPoint>,
    pub drivers: Vec<Driver>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl FeedSnapshot {
    /// Create an empty snapshot (view-mount state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the last cycle failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
