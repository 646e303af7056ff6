//! Fixed-cadence tick source.
//!
//! The poller owns the refresh timer and nothing else: it fires the
//! tick callback once immediately on start, then every interval,
//! until stopped. Ticks are independent: the poller never waits for
//! a tick's work to finish before scheduling the next, so a slow
//! fetch may overlap the following one. Backpressure is deliberately
//! absent; the snapshot store resolves overlap with
//! last-completion-wins.

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a running poller.
///
/// Dropping the handle does not stop the ticks; call
/// [`PollerHandle::stop`].
pub struct PollerHandle {
    token: CancellationToken,
}

impl PollerHandle {
    /// Cancel all future ticks. Idempotent: stopping twice, or
    /// stopping an already-stopped poller, has no effect.
    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            debug!("Poller stopped");
            self.token.cancel();
        }
    }

    /// Check whether the poller has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Tick scheduler.
pub struct Poller;

impl Poller {
    /// Start firing `on_tick` once immediately, then every `period`.
    ///
    /// Scheduling is not fallible: the returned handle is the only
    /// way to stop the cadence.
    pub fn start<F>(period: Duration, mut on_tick: F) -> PollerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let token = CancellationToken::new();
        let loop_token = token.clone();

        tokio::spawn(async move {
            // First tick completes immediately, giving the t=0 fire.
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = ticker.tick() => on_tick(),
                }
            }
            debug!("Poller loop exited");
        });

        PollerHandle { token }
    }
}
