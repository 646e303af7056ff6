//! Map view wiring.
//!
//! `MapView` ties a [`FeedSource`] to the snapshot store through the
//! lifecycle guard: activation starts the poll cadence, each tick
//! runs one fetch-and-reconcile cycle on its own task, deactivation
//! stops the cadence and makes in-flight completions no-ops.

use crate::guard::ViewGuard;
use crate::snapshot::SnapshotStore;
use fleetmap_core::FeedSnapshot;
use fleetmap_feed::FeedSource;
use fleetmap_telemetry::Metrics;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Reference poll cadence.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// A polling map view over one backend.
pub struct MapView<S: FeedSource> {
    source: S,
    store: Arc<SnapshotStore>,
    guard: ViewGuard,
    poll_interval: Duration,
}

impl<S: FeedSource> MapView<S> {
    /// Create a view with the default 5 s cadence.
    pub fn new(source: S) -> Self {
        Self::with_interval(source, DEFAULT_POLL_INTERVAL)
    }

    /// Create a view with an explicit poll interval.
    pub fn with_interval(source: S, poll_interval: Duration) -> Self {
        Self {
            source,
            store: Arc::new(SnapshotStore::new()),
            guard: ViewGuard::new(),
            poll_interval,
        }
    }

    /// Mount the view: start polling immediately and then on the
    /// configured interval.
    pub fn activate(self: &Arc<Self>) {
        let view = Arc::clone(self);
        self.guard.activate(self.poll_interval, move || {
            // Ticks never wait on the fetch; each cycle runs on its
            // own task and overlapping cycles resolve by completion
            // order.
            let view = Arc::clone(&view);
            tokio::spawn(async move { view.refresh().await });
        });
    }

    /// Unmount the view: cancel the timer and swallow any fetches
    /// still in flight. Idempotent.
    pub fn deactivate(&self) {
        self.guard.deactivate();
    }

    /// Check whether the view is mounted.
    pub fn is_active(&self) -> bool {
        self.guard.is_active()
    }

    /// Clone the current render-state snapshot.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.store.snapshot()
    }

    /// Shared handle to the snapshot store, for render-layer servers.
    pub fn store(&self) -> Arc<SnapshotStore> {
        Arc::clone(&self.store)
    }

    /// Run one fetch-and-reconcile cycle now.
    ///
    /// Both feeds are fetched concurrently; both succeeding is a
    /// successful cycle, either transport failure fails the cycle.
    /// The outcome is applied only while the view is still mounted.
    pub async fn refresh(&self) {
        let (relay, drivers) = tokio::join!(
            self.source.fetch_relay_points(),
            self.source.fetch_drivers()
        );

        match (relay, drivers) {
            (Ok(relay), Ok(drivers)) => {
                let applied = self
                    .guard
                    .run_if_active(|| self.store.apply_success(&relay, &drivers));
                if applied {
                    Metrics::poll_cycle("success");
                } else {
                    debug!("Cycle completed after deactivation, discarding");
                }
            }
            (relay, drivers) => {
                let mut reason = String::new();
                if let Err(e) = &relay {
                    Metrics::fetch_failure("relay_points");
                    reason = e.to_string();
                }
                if let Err(e) = &drivers {
                    Metrics::fetch_failure("drivers");
                    if reason.is_empty() {
                        reason = e.to_string();
                    }
                }
                warn!(error = %reason, "Poll cycle failed");

                let applied = self.guard.run_if_active(|| self.store.apply_failure(&reason));
                if applied {
                    Metrics::poll_cycle("failure");
                } else {
                    debug!("Cycle completed after deactivation, discarding");
                }
            }
        }
    }
}
