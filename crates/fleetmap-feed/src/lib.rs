//! Position backend client and payload normalization for fleetmap.
//!
//! The backend exposes two independent read endpoints: one for relay
//! points, one for drivers. This crate owns the seam to that backend
//! (`FeedSource`, with an HTTP implementation) and the normalization
//! of its loosely-typed payloads into the typed entries the map
//! renders.
//!
//! Error split:
//! - A transport or decode failure of the call itself is a
//!   `FeedError` (the cycle failed; previous data is retained).
//! - A payload that arrived but is not a well-formed sequence of
//!   position-bearing records normalizes to an empty sequence for
//!   that feed only. The call succeeded, so this is not an error.

pub mod error;
pub mod parser;
pub mod source;

pub use error::{FeedError, FeedResult};
pub use parser::{normalize_drivers, normalize_relay_points};
pub use source::{FeedSource, HttpFeedSource};
