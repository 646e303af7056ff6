//! View lifecycle guard.
//!
//! Binds the poll cadence to the consuming view's mounted lifetime
//! and prevents state writes after teardown. One guard instance lives
//! exactly one mount: `Idle -> Active` on activate, `Active ->
//! Retired` on deactivate, and `Retired` is terminal. A remounted
//! view gets a fresh guard.

use crate::poller::{Poller, PollerHandle};
use parking_lot::{Mutex, RwLock};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Idle,
    Active,
    Retired,
}

/// Lifecycle guard for one view mount.
pub struct ViewGuard {
    state: RwLock<GuardState>,
    poller: Mutex<Option<PollerHandle>>,
}

impl ViewGuard {
    /// Create a guard in the `Idle` state.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(GuardState::Idle),
            poller: Mutex::new(None),
        }
    }

    /// Mark the guard active and start the poll cadence.
    ///
    /// `on_cycle` fires once immediately and then every `period`. On
    /// an already-active or retired guard this is a logged no-op.
    pub fn activate<F>(&self, period: Duration, on_cycle: F)
    where
        F: FnMut() + Send + 'static,
    {
        // Lock order: poller before state, same as deactivate.
        let mut poller = self.poller.lock();
        {
            let mut state = self.state.write();
            match *state {
                GuardState::Idle => *state = GuardState::Active,
                GuardState::Active => {
                    warn!("activate called on an active guard, ignoring");
                    return;
                }
                GuardState::Retired => {
                    warn!("activate called on a retired guard, ignoring");
                    return;
                }
            }
        }

        *poller = Some(Poller::start(period, on_cycle));
        info!(period_ms = period.as_millis() as u64, "View activated");
    }

    /// Stop the poll cadence and retire the guard. Idempotent.
    ///
    /// Acquiring the state write lock waits out any apply still
    /// holding the read lock in [`ViewGuard::run_if_active`], so no
    /// snapshot mutation is observable after this returns.
    pub fn deactivate(&self) {
        if let Some(handle) = self.poller.lock().take() {
            handle.stop();
        }

        let mut state = self.state.write();
        if *state != GuardState::Retired {
            *state = GuardState::Retired;
            info!("View deactivated");
        }
    }

    /// Run `f` only while the guard is active, holding the guard for
    /// the duration of the call. Returns whether `f` ran.
    ///
    /// Completions that land after deactivation are swallowed here.
    pub fn run_if_active<F: FnOnce()>(&self, f: F) -> bool {
        let state = self.state.read();
        if *state == GuardState::Active {
            f();
            true
        } else {
            false
        }
    }

    /// Check whether the guard is active.
    pub fn is_active(&self) -> bool {
        *self.state.read() == GuardState::Active
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        Self::new()
    }
}
