//! HTTP render surface for the fleetmap snapshot.
//!
//! Serves the current [`FeedSnapshot`](fleetmap_core::FeedSnapshot)
//! to a render layer:
//!
//! - `GET /`: static map page (one marker row per entry keyed by id,
//!   explicit "no relay points/drivers available" placeholders)
//! - `GET /api/snapshot`: JSON snapshot
//! - `GET /healthz`: liveness probe
//!
//! The server only reads the snapshot store; all mutation stays with
//! the view core.

pub mod config;
pub mod error;
pub mod server;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use server::{create_router, run_server, AppState};
