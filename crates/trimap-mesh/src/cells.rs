//! Per-cell vertex coordinates as supplied by a grid data source.
//!
//! Stored SoA: `lon[3*c .. 3*c+3]` and `lat[3*c .. 3*c+3]` hold the three
//! vertices of cell `c`, in radians. Cells share no vertices.

use trimap_types::constants::VERTICES_PER_CELL;
use trimap_types::{TrimapError, TrimapResult};

/// Vertex coordinates of `ncell` triangular cells, in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct CellVertexArray {
    lon: Vec<f64>,
    lat: Vec<f64>,
}

impl CellVertexArray {
    /// Builds from fixed-size triples; only the cell counts can disagree.
    pub fn from_triples(lon: Vec<[f64; 3]>, lat: Vec<[f64; 3]>) -> TrimapResult<Self> {
        if lon.len() != lat.len() {
            return Err(TrimapError::InvalidGrid(format!(
                "Longitude vertices describe {} cells but latitude vertices describe {}",
                lon.len(),
                lat.len()
            )));
        }
        Ok(Self {
            lon: lon.into_iter().flatten().collect(),
            lat: lat.into_iter().flatten().collect(),
        })
    }

    /// Builds from row-per-cell nested arrays, the `(ncell, 3)` layout of
    /// `cell_longitude_vertices` / `cell_latitude_vertices`.
    ///
    /// Fails with `InvalidGrid` on ragged rows, rows that are not exactly
    /// three vertices long, or mismatched cell counts.
    pub fn from_nested(lon: &[Vec<f64>], lat: &[Vec<f64>]) -> TrimapResult<Self> {
        if lon.len() != lat.len() {
            return Err(TrimapError::InvalidGrid(format!(
                "Longitude vertices describe {} cells but latitude vertices describe {}",
                lon.len(),
                lat.len()
            )));
        }

        let mut flat_lon = Vec::with_capacity(lon.len() * VERTICES_PER_CELL);
        let mut flat_lat = Vec::with_capacity(lat.len() * VERTICES_PER_CELL);

        for (c, (row_lon, row_lat)) in lon.iter().zip(lat).enumerate() {
            if row_lon.len() != VERTICES_PER_CELL || row_lat.len() != VERTICES_PER_CELL {
                return Err(TrimapError::InvalidGrid(format!(
                    "Cell {} has {} longitude and {} latitude vertices, expected {}",
                    c,
                    row_lon.len(),
                    row_lat.len(),
                    VERTICES_PER_CELL
                )));
            }
            flat_lon.extend_from_slice(row_lon);
            flat_lat.extend_from_slice(row_lat);
        }

        Ok(Self {
            lon: flat_lon,
            lat: flat_lat,
        })
    }

    /// Builds from row-major flat arrays of shape `(ncell, vertices_per_cell)`.
    pub fn from_flat(lon: Vec<f64>, lat: Vec<f64>, vertices_per_cell: usize) -> TrimapResult<Self> {
        if vertices_per_cell != VERTICES_PER_CELL {
            return Err(TrimapError::InvalidGrid(format!(
                "Cells must have exactly {} vertices, got {}",
                VERTICES_PER_CELL, vertices_per_cell
            )));
        }
        if lon.len() != lat.len() {
            return Err(TrimapError::InvalidGrid(format!(
                "Longitude array has {} entries but latitude array has {}",
                lon.len(),
                lat.len()
            )));
        }
        if lon.len() % VERTICES_PER_CELL != 0 {
            return Err(TrimapError::InvalidGrid(format!(
                "Vertex array length {} is not divisible by {}",
                lon.len(),
                VERTICES_PER_CELL
            )));
        }
        Ok(Self { lon, lat })
    }

    /// Wraps flat arrays whose lengths are already known to agree and to be
    /// a multiple of three.
    pub(crate) fn from_parts(lon: Vec<f64>, lat: Vec<f64>) -> Self {
        debug_assert_eq!(lon.len(), lat.len());
        debug_assert_eq!(lon.len() % VERTICES_PER_CELL, 0);
        Self { lon, lat }
    }

    /// Number of cells.
    #[inline]
    pub fn ncell(&self) -> usize {
        self.lon.len() / VERTICES_PER_CELL
    }

    /// Returns true if there are no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }

    /// Vertex longitudes and latitudes (radians) of cell `c`.
    #[inline]
    pub fn cell(&self, c: usize) -> ([f64; 3], [f64; 3]) {
        let b = c * VERTICES_PER_CELL;
        (
            [self.lon[b], self.lon[b + 1], self.lon[b + 2]],
            [self.lat[b], self.lat[b + 1], self.lat[b + 2]],
        )
    }

    /// Flat vertex longitudes in radians.
    #[inline]
    pub fn lon_radians(&self) -> &[f64] {
        &self.lon
    }

    /// Flat vertex latitudes in radians.
    #[inline]
    pub fn lat_radians(&self) -> &[f64] {
        &self.lat
    }
}
