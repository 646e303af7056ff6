//! Periodic fetch-and-reconcile core for the fleetmap map view.
//!
//! Three cooperating pieces back a live map (or any polling
//! dashboard):
//!
//! - [`Poller`]: fixed-cadence tick source; fires immediately on
//!   start, then every interval, until stopped.
//! - [`SnapshotStore`]: reconciles fetch outcomes into the
//!   render-state [`FeedSnapshot`](fleetmap_core::FeedSnapshot)
//!   without ever blanking previously-good data on failure.
//! - [`ViewGuard`]: binds the cadence to the consuming view's mounted
//!   lifetime and swallows completions that land after teardown.
//!
//! [`MapView`] wires them to a [`FeedSource`](fleetmap_feed::FeedSource):
//! activation starts the cadence, each tick fetches both feeds
//! concurrently and reconciles the outcome, deactivation cancels the
//! timer and makes in-flight completions no-ops.
//!
//! Overlapping fetches are allowed (a tick never waits for the
//! previous fetch) and results apply in completion order:
//! last-completion-wins is the documented conflict policy, trading
//! perfect recency for simplicity.

pub mod guard;
pub mod poller;
pub mod snapshot;
pub mod view;

pub use guard::ViewGuard;
pub use poller::{Poller, PollerHandle};
pub use snapshot::SnapshotStore;
pub use view::{MapView, DEFAULT_POLL_INTERVAL};
