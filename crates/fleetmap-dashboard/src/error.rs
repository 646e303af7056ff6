//! Dashboard error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to bind dashboard listener: {0}")]
    Bind(std::io::Error),

    #[error("Dashboard server error: {0}")]
    Serve(std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
