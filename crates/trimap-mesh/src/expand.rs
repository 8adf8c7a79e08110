//! Vertex expansion: per-cell radians → independent points in degrees.
//!
//! Point `i` of the output belongs to cell `i / 3`, and triangle `c` is
//! `[3c, 3c+1, 3c+2]`. Coincident vertices of neighbouring cells stay
//! separate points, so every cell can be shaded and masked on its own.

use serde::{Deserialize, Serialize};
use trimap_types::constants::VERTICES_PER_CELL;
use trimap_types::{PointId, Scalar, TrimapError, TrimapResult};

use crate::cells::CellVertexArray;

/// Flattened point coordinates in degrees, SoA layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPointSet {
    /// Longitudes in degrees.
    pub lon: Vec<Scalar>,
    /// Latitudes in degrees.
    pub lat: Vec<Scalar>,
}

impl FlatPointSet {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.lon.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }

    /// Returns `(lon, lat)` of point `p` in degrees.
    #[inline]
    pub fn point(&self, p: PointId) -> (Scalar, Scalar) {
        (self.lon[p.index()], self.lat[p.index()])
    }
}

/// Triangle index triples, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleIndex {
    pub indices: Vec<u32>,
}

impl TriangleIndex {
    /// Consecutive triples `(3i, 3i+1, 3i+2)` for `ncell` cells.
    pub fn consecutive(ncell: usize) -> TrimapResult<Self> {
        let point_count = ncell
            .checked_mul(VERTICES_PER_CELL)
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or_else(|| {
                TrimapError::InvalidGrid(format!(
                    "{} cells exceed the addressable point range",
                    ncell
                ))
            })?;
        Ok(Self {
            indices: (0..point_count as u32).collect(),
        })
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the three point indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns true if no point index is referenced by more than one triangle
    /// slot.
    pub fn is_partition(&self) -> bool {
        let Some(&max) = self.indices.iter().max() else {
            return true;
        };
        let mut seen = vec![false; max as usize + 1];
        for &i in &self.indices {
            if std::mem::replace(&mut seen[i as usize], true) {
                return false;
            }
        }
        true
    }
}

/// Output of [`VertexExpander::expand`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedGrid {
    pub points: FlatPointSet,
    pub triangles: TriangleIndex,
}

/// Flattens a [`CellVertexArray`] into points and triangles.
///
/// Pure: the conversion multiplies by `180/π` and applies no clamping or
/// longitude wrapping.
pub struct VertexExpander;

impl VertexExpander {
    /// Expands `cells` into `3·ncell` points (degrees) and `ncell` triangles.
    pub fn expand(cells: &CellVertexArray) -> TrimapResult<ExpandedGrid> {
        let triangles = TriangleIndex::consecutive(cells.ncell())?;

        let points = FlatPointSet {
            lon: cells.lon_radians().iter().map(|r| r.to_degrees()).collect(),
            lat: cells.lat_radians().iter().map(|r| r.to_degrees()).collect(),
        };

        tracing::debug!(
            cells = cells.ncell(),
            points = points.len(),
            "expanded cell vertices"
        );

        Ok(ExpandedGrid { points, triangles })
    }
}
