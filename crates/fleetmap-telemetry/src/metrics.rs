//! Prometheus metrics for fleetmap.
//!
//! Covers the refresh pipeline:
//! - Poll cycle outcomes
//! - Fetch failures per feed
//! - Entries dropped during normalization
//! - Entries currently rendered per feed
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration
//! fails, it indicates a fatal configuration error (e.g., duplicate
//! metric names) that should cause an immediate crash at startup
//! rather than silent failure. These panics only occur during static
//! initialization, never at runtime.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_int_gauge_vec, CounterVec, IntGaugeVec,
};

/// Total poll cycles by outcome (success/failure).
pub static POLL_CYCLES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "fleetmap_poll_cycles_total",
        "Total poll cycles by outcome",
        &["outcome"]
    )
    .unwrap()
});

/// Total fetch failures per feed.
pub static FETCH_FAILURES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "fleetmap_fetch_failures_total",
        "Total transport-level fetch failures per feed",
        &["feed"]
    )
    .unwrap()
});

/// Total entries dropped during normalization per feed.
pub static ENTRIES_DROPPED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "fleetmap_entries_dropped_total",
        "Total feed entries dropped for missing id or position",
        &["feed"]
    )
    .unwrap()
});

/// Entries currently in the rendered snapshot per feed.
pub static FEED_ENTRIES: Lazy<IntGaugeVec> = Lazy::new(|| {
    register_int_gauge_vec!(
        "fleetmap_feed_entries",
        "Entries currently in the rendered snapshot",
        &["feed"]
    )
    .unwrap()
});

/// Metrics facade.
pub struct Metrics;

impl Metrics {
    /// Record a completed poll cycle.
    pub fn poll_cycle(outcome: &str) {
        POLL_CYCLES_TOTAL.with_label_values(&[outcome]).inc();
    }

    /// Record a transport-level fetch failure.
    pub fn fetch_failure(feed: &str) {
        FETCH_FAILURES_TOTAL.with_label_values(&[feed]).inc();
    }

    /// Record entries dropped during normalization.
    pub fn entries_dropped(feed: &str, count: u64) {
        if count > 0 {
            ENTRIES_DROPPED_TOTAL
                .with_label_values(&[feed])
                .inc_by(count as f64);
        }
    }

    /// Update the rendered entry count for a feed.
    pub fn feed_entries(feed: &str, count: i64) {
        FEED_ENTRIES.with_label_values(&[feed]).set(count);
    }
}
