//! Triangulated surface: flat points, triangle index, and an optional mask.
//!
//! A triangulation starts **Unmasked** and becomes **Masked** once a mask is
//! written (normally by [`crate::DatelineMasker`]). Renderers refuse the
//! Unmasked state. After masking the structure is read-only in practice and
//! can be shared across any number of field renders.

use serde::{Deserialize, Serialize};
use trimap_types::{TriangleId, TrimapError, TrimapResult};

use crate::cells::CellVertexArray;
use crate::expand::{ExpandedGrid, FlatPointSet, TriangleIndex, VertexExpander};

/// Masking state of a [`Triangulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskState {
    /// No mask computed; every triangle would be drawn.
    Unmasked,
    /// A mask has been assigned.
    Masked,
}

/// Assembles expander output into an Unmasked [`Triangulation`].
pub struct TriangulationBuilder;

impl TriangulationBuilder {
    pub fn build(grid: ExpandedGrid) -> TrimapResult<Triangulation> {
        let ExpandedGrid { points, triangles } = grid;
        let tri = Triangulation::new(points, triangles)?;
        tracing::debug!(
            points = tri.point_count(),
            triangles = tri.triangle_count(),
            "triangulation assembled"
        );
        Ok(tri)
    }
}

/// Points, triangles, and a per-triangle exclusion mask (`true` = hidden).
///
/// Deserialization runs [`Triangulation::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTriangulation")]
pub struct Triangulation {
    points: FlatPointSet,
    triangles: TriangleIndex,
    mask: Option<Vec<bool>>,
}

/// Unchecked serde form of [`Triangulation`].
#[derive(Deserialize)]
struct RawTriangulation {
    points: FlatPointSet,
    triangles: TriangleIndex,
    #[serde(default)]
    mask: Option<Vec<bool>>,
}

impl TryFrom<RawTriangulation> for Triangulation {
    type Error = TrimapError;

    fn try_from(raw: RawTriangulation) -> TrimapResult<Self> {
        let tri = Self {
            points: raw.points,
            triangles: raw.triangles,
            mask: raw.mask,
        };
        tri.validate()?;
        Ok(tri)
    }
}

impl Triangulation {
    /// Assembles a triangulation with no mask.
    ///
    /// Only structural consistency is checked (equal coordinate lengths,
    /// whole triples, in-range indices). Overlapping or non-manifold
    /// geometry is accepted.
    pub fn new(points: FlatPointSet, triangles: TriangleIndex) -> TrimapResult<Self> {
        let tri = Self {
            points,
            triangles,
            mask: None,
        };
        tri.validate()?;
        Ok(tri)
    }

    /// Expands `cells` and assembles the result.
    pub fn from_cells(cells: &CellVertexArray) -> TrimapResult<Self> {
        TriangulationBuilder::build(VertexExpander::expand(cells)?)
    }

    /// Validates structural integrity, including the mask length if set.
    pub fn validate(&self) -> TrimapResult<()> {
        let n = self.points.lon.len();
        if self.points.lat.len() != n {
            return Err(TrimapError::InvalidGrid(format!(
                "Point arrays have inconsistent lengths ({} lon, {} lat)",
                n,
                self.points.lat.len()
            )));
        }
        if self.triangles.indices.len() % 3 != 0 {
            return Err(TrimapError::InvalidGrid(
                "Triangle index count is not divisible by 3".into(),
            ));
        }
        for (i, &idx) in self.triangles.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(TrimapError::InvalidGrid(format!(
                    "Index {} at position {} is out of range (point count: {})",
                    idx, i, n
                )));
            }
        }
        if let Some(mask) = &self.mask {
            if mask.len() != self.triangle_count() {
                return Err(TrimapError::shape_mismatch(
                    "triangle mask",
                    self.triangle_count(),
                    mask.len(),
                ));
            }
        }
        Ok(())
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn points(&self) -> &FlatPointSet {
        &self.points
    }

    #[inline]
    pub fn triangles(&self) -> &TriangleIndex {
        &self.triangles
    }

    /// Returns the three point indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        self.triangles.triangle(t)
    }

    /// Vertex longitudes (degrees) of triangle `t`.
    #[inline]
    pub fn triangle_lons(&self, t: usize) -> [f64; 3] {
        let [a, b, c] = self.triangle(t);
        let lon = &self.points.lon;
        [lon[a as usize], lon[b as usize], lon[c as usize]]
    }

    /// Vertex latitudes (degrees) of triangle `t`.
    #[inline]
    pub fn triangle_lats(&self, t: usize) -> [f64; 3] {
        let [a, b, c] = self.triangle(t);
        let lat = &self.points.lat;
        [lat[a as usize], lat[b as usize], lat[c as usize]]
    }

    /// Current masking state.
    #[inline]
    pub fn state(&self) -> MaskState {
        if self.mask.is_some() {
            MaskState::Masked
        } else {
            MaskState::Unmasked
        }
    }

    /// The mask, if one has been assigned.
    #[inline]
    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    /// Returns the mask, or a `Precondition` error naming `operation` when the
    /// triangulation is still Unmasked.
    pub fn require_mask(&self, operation: &str) -> TrimapResult<&[bool]> {
        self.mask.as_deref().ok_or_else(|| {
            TrimapError::Precondition(format!(
                "{} requires a masked triangulation; apply the dateline mask first",
                operation
            ))
        })
    }

    /// Returns true if triangle `t` is excluded. Unmasked triangulations hide nothing.
    #[inline]
    pub fn is_masked(&self, t: usize) -> bool {
        self.mask
            .as_ref()
            .is_some_and(|m| m.get(t).copied().unwrap_or(false))
    }

    /// Replaces the mask. Its length must equal the triangle count.
    pub fn set_mask(&mut self, mask: Vec<bool>) -> TrimapResult<()> {
        if mask.len() != self.triangle_count() {
            return Err(TrimapError::shape_mismatch(
                "triangle mask",
                self.triangle_count(),
                mask.len(),
            ));
        }
        self.mask = Some(mask);
        Ok(())
    }

    /// Drops the mask, returning to the Unmasked state.
    pub fn clear_mask(&mut self) {
        self.mask = None;
    }

    /// Number of masked triangles (0 when Unmasked).
    pub fn masked_count(&self) -> usize {
        self.mask
            .as_ref()
            .map_or(0, |m| m.iter().filter(|&&hidden| hidden).count())
    }

    /// Iterates the triangles that are not masked, in index order.
    pub fn visible_triangles(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangle_count())
            .filter(move |&t| !self.is_masked(t))
            .map(|t| TriangleId(t as u32))
    }

    /// `(min, max)` longitude over all points, or `None` if empty.
    pub fn lon_range(&self) -> Option<(f64, f64)> {
        range(&self.points.lon)
    }

    /// `(min, max)` latitude over all points, or `None` if empty.
    pub fn lat_range(&self) -> Option<(f64, f64)> {
        range(&self.points.lat)
    }
}

fn range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
