//! Strongly-typed identifiers for grid entities.
//!
//! Newtype wrappers prevent accidental mixing of point indices
//! with cell or triangle indices.

use serde::{Deserialize, Serialize};

/// Index into the flattened point arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

/// Index into the triangle array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriangleId(pub u32);

/// Index of a source grid cell (and of its value in a cell field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The cell this point was expanded from.
    #[inline]
    pub fn cell(self) -> CellId {
        CellId(self.0 / 3)
    }
}

impl TriangleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Each cell maps to exactly one triangle with the same index.
    #[inline]
    pub fn cell(self) -> CellId {
        CellId(self.0)
    }
}

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for TriangleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for CellId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
