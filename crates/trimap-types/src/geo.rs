//! Geographic vocabulary shared by the mesh, render, and io crates.

use serde::{Deserialize, Serialize};

use crate::error::{TrimapError, TrimapResult};

/// Coordinate reference system tag attached to every draw call.
///
/// Only the equirectangular longitude/latitude system is produced today;
/// surfaces that reproject do so on their own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crs {
    /// Plate carrée: longitude and latitude in degrees on linear axes.
    #[default]
    PlateCarree,
}

impl Crs {
    /// Short identifier used in exported scenes.
    pub fn name(self) -> &'static str {
        match self {
            Crs::PlateCarree => "plate_carree",
        }
    }
}

/// Geographic bounding box `[lon_min, lon_max, lat_min, lat_max]` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct GeoExtent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl GeoExtent {
    /// The whole globe.
    pub const GLOBAL: GeoExtent = GeoExtent {
        lon_min: -180.0,
        lon_max: 180.0,
        lat_min: -90.0,
        lat_max: 90.0,
    };

    /// Creates a validated extent.
    ///
    /// Requires finite bounds, `lon_min < lon_max`, `lat_min < lat_max`,
    /// and latitudes within `[-90, 90]`.
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> TrimapResult<Self> {
        let extent = Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        };
        extent.validate()?;
        Ok(extent)
    }

    /// Checks the invariants documented on [`GeoExtent::new`].
    pub fn validate(&self) -> TrimapResult<()> {
        let bounds = [self.lon_min, self.lon_max, self.lat_min, self.lat_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(TrimapError::InvalidConfig(format!(
                "Extent bounds must be finite, got {:?}",
                bounds
            )));
        }
        if self.lon_min >= self.lon_max {
            return Err(TrimapError::InvalidConfig(format!(
                "Extent lon_min ({}) must be less than lon_max ({})",
                self.lon_min, self.lon_max
            )));
        }
        if self.lat_min >= self.lat_max {
            return Err(TrimapError::InvalidConfig(format!(
                "Extent lat_min ({}) must be less than lat_max ({})",
                self.lat_min, self.lat_max
            )));
        }
        if self.lat_min < -90.0 || self.lat_max > 90.0 {
            return Err(TrimapError::InvalidConfig(format!(
                "Extent latitudes must lie in [-90, 90], got [{}, {}]",
                self.lat_min, self.lat_max
            )));
        }
        Ok(())
    }

    /// Longitude width in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Latitude height in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Returns true if the point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max && lat >= self.lat_min && lat <= self.lat_max
    }

    /// Returns true if the axis-aligned box of the given points overlaps this extent.
    pub fn overlaps_points(&self, lons: &[f64], lats: &[f64]) -> bool {
        let (lo_x, hi_x) = min_max(lons);
        let (lo_y, hi_y) = min_max(lats);
        !(hi_x < self.lon_min || lo_x > self.lon_max || hi_y < self.lat_min || lo_y > self.lat_max)
    }

    /// Returns the bounds as `[lon_min, lon_max, lat_min, lat_max]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.lon_min, self.lon_max, self.lat_min, self.lat_max]
    }
}

impl Default for GeoExtent {
    fn default() -> Self {
        Self::GLOBAL
    }
}

impl TryFrom<[f64; 4]> for GeoExtent {
    type Error = TrimapError;

    fn try_from(b: [f64; 4]) -> TrimapResult<Self> {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

impl From<GeoExtent> for [f64; 4] {
    fn from(e: GeoExtent) -> Self {
        e.to_array()
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
