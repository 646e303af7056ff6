//! Snapshot reconciliation.
//!
//! `SnapshotStore` owns the render-state [`FeedSnapshot`] and is the
//! only writer to it. Each fetch cycle terminates here in one of two
//! ways:
//!
//! - success: both payloads are normalized independently and replace
//!   the sequences wholesale (the backend is the source of truth for
//!   the current tick), and `error` is cleared;
//! - failure: `error` is set with the reason and the sequences are
//!   left untouched (last-known-good retained).
//!
//! An empty-but-well-formed payload is a success with an empty
//! sequence, not a failure: the map renders "nothing available"
//! rather than reusing stale entries.

use fleetmap_core::{ErrorInfo, FeedSnapshot};
use fleetmap_feed::{normalize_drivers, normalize_relay_points};
use fleetmap_telemetry::Metrics;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

/// Render-state holder and reconciler.
pub struct SnapshotStore {
    snapshot: RwLock<FeedSnapshot>,
}

impl SnapshotStore {
    /// Create a store with an empty snapshot (view-mount state).
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(FeedSnapshot::empty()),
        }
    }

    /// Clone the current snapshot for the render layer.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.read().clone()
    }

    /// Apply a successful cycle: replace both sequences wholesale and
    /// clear any previous error.
    pub fn apply_success(&self, relay_payload: &Value, driver_payload: &Value) {
        let relay = normalize_relay_points(relay_payload);
        let drivers = normalize_drivers(driver_payload);

        Metrics::entries_dropped("relay_points", relay.dropped as u64);
        Metrics::entries_dropped("drivers", drivers.dropped as u64);
        Metrics::feed_entries("relay_points", relay.entries.len() as i64);
        Metrics::feed_entries("drivers", drivers.entries.len() as i64);

        debug!(
            relay_points = relay.entries.len(),
            drivers = drivers.entries.len(),
            dropped = relay.dropped + drivers.dropped,
            "Applying successful cycle"
        );

        let mut snapshot = self.snapshot.write();
        snapshot.relay_points = relay.entries;
        snapshot.drivers = drivers.entries;
        snapshot.error = None;
    }

    /// Apply a failed cycle: record the error, keep the sequences.
    pub fn apply_failure(&self, reason: &str) {
        debug!(reason, "Applying failed cycle, retaining previous entries");

        let mut snapshot = self.snapshot.write();
        snapshot.error = Some(ErrorInfo::now(reason));
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetmap_core::GeoPoint;
    use serde_json::json;

    #[test]
    fn test_success_replaces_wholesale_and_clears_error() {
        let store = SnapshotStore::new();

        store.apply_failure("timeout");
        assert!(store.snapshot().has_error());

        store.apply_success(
            &json!([{"id": "r1", "lat": 10.0, "lng": 20.0}]),
            &json!([{"id": "d1", "lat": 1.0, "lng": 2.0}]),
        );

        let snapshot = store.snapshot();
        assert!(!snapshot.has_error());
        assert_eq!(snapshot.relay_points.len(), 1);
        assert_eq!(snapshot.drivers.len(), 1);
        assert_eq!(snapshot.drivers[0].position, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_failure_retains_previous_entries() {
        let store = SnapshotStore::new();
        store.apply_success(
            &json!([
                {"id": "a", "lat": 1.0, "lng": 1.0},
                {"id": "b", "lat": 2.0, "lng": 2.0},
            ]),
            &json!([]),
        );

        store.apply_failure("timeout");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.relay_points.len(), 2);
        assert!(snapshot.drivers.is_empty());
        let error = snapshot.error.expect("error should be set");
        assert_eq!(error.message, "timeout");
    }

    #[test]
    fn test_empty_payload_is_success_not_failure() {
        let store = SnapshotStore::new();
        store.apply_success(
            &json!([{"id": "a", "lat": 1.0, "lng": 1.0}]),
            &json!([{"id": "d", "lat": 3.0, "lng": 4.0}]),
        );

        // Empty relay feed renders as empty, does not reuse stale
        // entries, and does not suppress the driver feed.
        store.apply_success(&json!([]), &json!([{"id": "1", "lat": 10.0, "lng": 20.0}]));

        let snapshot = store.snapshot();
        assert!(snapshot.relay_points.is_empty());
        assert_eq!(snapshot.drivers.len(), 1);
        assert_eq!(snapshot.drivers[0].id, "1");
        assert_eq!(snapshot.drivers[0].position, GeoPoint::new(10.0, 20.0));
        assert!(!snapshot.has_error());
    }

    #[test]
    fn test_malformed_feed_does_not_suppress_healthy_feed() {
        let store = SnapshotStore::new();

        store.apply_success(
            &json!("<html>not a feed</html>"),
            &json!([{"id": "d1", "lat": 5.0, "lng": 6.0}]),
        );

        let snapshot = store.snapshot();
        assert!(snapshot.relay_points.is_empty());
        assert_eq!(snapshot.drivers.len(), 1);
        // The call itself succeeded, so no error is surfaced.
        assert!(!snapshot.has_error());
    }

    #[test]
    fn test_last_write_wins_overwrite() {
        let store = SnapshotStore::new();

        // A faster later cycle lands first...
        store.apply_success(&json!([]), &json!([{"id": "fast", "lat": 1.0, "lng": 1.0}]));
        // ...then the slower earlier cycle completes and overwrites.
        store.apply_success(&json!([]), &json!([{"id": "slow", "lat": 2.0, "lng": 2.0}]));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.drivers.len(), 1);
        assert_eq!(snapshot.drivers[0].id, "slow");
    }

    #[test]
    fn test_every_outcome_leaves_sequences_present() {
        let store = SnapshotStore::new();

        store.apply_failure("boom");
        let snapshot = store.snapshot();
        assert!(snapshot.relay_points.is_empty());
        assert!(snapshot.drivers.is_empty());

        store.apply_success(&json!(null), &json!(null));
        let snapshot = store.snapshot();
        assert!(snapshot.relay_points.is_empty());
        assert!(snapshot.drivers.is_empty());
    }
}
