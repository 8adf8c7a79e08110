//! # trimap-types
//!
//! Shared types, identifiers, error types, and constants
//! for the trimap geodesic-grid map renderer.
//!
//! This crate has no mesh or rendering logic; it defines the vocabulary
//! that all other trimap crates share.

pub mod constants;
pub mod error;
pub mod geo;
pub mod ids;
pub mod scalar;

pub use error::{TrimapError, TrimapResult};
pub use geo::{Crs, GeoExtent};
pub use ids::{CellId, PointId, TriangleId};
pub use scalar::Scalar;
