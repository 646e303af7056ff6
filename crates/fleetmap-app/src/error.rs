//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(#[from] fleetmap_feed::FeedError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] fleetmap_telemetry::TelemetryError),

    #[error("Dashboard error: {0}")]
    Dashboard(#[from] fleetmap_dashboard::DashboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
