//! fleetmap delivery-tracking map service.
//!
//! Orchestrates the member crates:
//! - position backend client (fleetmap-feed)
//! - poll-and-reconcile view core (fleetmap-view)
//! - HTTP render surface (fleetmap-dashboard)
//! - logging and metrics (fleetmap-telemetry)

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
