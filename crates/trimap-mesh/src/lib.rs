//! # trimap-mesh
//!
//! Turns per-cell triangle vertices of an unstructured geodesic grid into a
//! drawable triangulation, and masks the triangles that straddle the ±180°
//! longitude seam.
//!
//! ## Key Types
//!
//! - [`CellVertexArray`]: validated per-cell vertex coordinates in radians.
//! - [`VertexExpander`]: flattens cells into independent points (degrees)
//!   and a consecutive triangle index.
//! - [`TriangulationBuilder`]: assembles expander output, Unmasked.
//! - [`Triangulation`]: points + triangles + optional mask, built once per
//!   grid and reused across field renders.
//! - [`DatelineMasker`]: flags seam-crossing triangles.
//! - Procedural generators for global and regional test grids.

pub mod cells;
pub mod dateline;
pub mod expand;
pub mod generators;
pub mod triangulation;

pub use cells::CellVertexArray;
pub use dateline::{max_lon_span, DatelineMasker, MaskSummary};
pub use expand::{ExpandedGrid, FlatPointSet, TriangleIndex, VertexExpander};
pub use triangulation::{MaskState, Triangulation, TriangulationBuilder};
