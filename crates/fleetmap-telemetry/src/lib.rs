//! Prometheus metrics and structured logging for fleetmap.
//!
//! - Prometheus metrics for poll cycles, fetch failures, and feed
//!   entry counts
//! - Structured JSON logging with tracing

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
