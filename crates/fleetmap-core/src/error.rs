//! Error types for fleetmap-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
