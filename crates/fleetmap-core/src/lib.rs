//! Core domain types for the fleetmap live-map service.
//!
//! This crate provides the fundamental types shared across the system:
//! - `GeoPoint`: a latitude/longitude pair
//! - `RelayPoint`, `Driver`: position-bearing map entries keyed by id
//! - `FeedSnapshot`: the render-layer-facing state produced by each
//!   reconciliation cycle
//! - `ErrorInfo`: the most recent fetch failure, surfaced alongside
//!   retained data

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Driver, ErrorInfo, FeedSnapshot, GeoPoint, RelayPoint};
