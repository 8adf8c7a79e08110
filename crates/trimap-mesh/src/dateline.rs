//! Antimeridian masking.
//!
//! A cell whose vertices sit on both sides of the ±180° seam (say +179° and
//! −179°) is small on the sphere but becomes a screen-wide sliver in a
//! longitude/latitude plot. Such triangles are detected by their longitude
//! span: the largest of the three pairwise vertex differences. A span
//! strictly greater than the threshold (180° by default) masks the triangle.
//!
//! Cells near the poles can legitimately span a wide range of longitudes
//! because meridians converge there; they are masked too. No polar
//! special-casing is applied.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use trimap_types::constants::DATELINE_SPAN_THRESHOLD_DEG;
use trimap_types::{TrimapError, TrimapResult};

use crate::triangulation::Triangulation;

/// Masked fraction above which a warning is logged.
const SUSPICIOUS_MASKED_FRACTION: f64 = 0.1;

/// Largest absolute pairwise difference between three longitudes.
///
/// NaN propagates as "not larger", so a NaN vertex never triggers masking.
#[inline]
pub fn max_lon_span(lons: [f64; 3]) -> f64 {
    let d01 = (lons[0] - lons[1]).abs();
    let d12 = (lons[1] - lons[2]).abs();
    let d02 = (lons[0] - lons[2]).abs();
    d01.max(d12).max(d02)
}

/// Statistics from one masking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskSummary {
    pub triangles: usize,
    pub masked: usize,
    pub threshold_deg: f64,
}

impl MaskSummary {
    /// Fraction of triangles masked, 0.0 for an empty mesh.
    pub fn masked_fraction(&self) -> f64 {
        if self.triangles == 0 {
            0.0
        } else {
            self.masked as f64 / self.triangles as f64
        }
    }
}

/// Flags triangles whose longitude span exceeds a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatelineMasker {
    threshold_deg: f64,
    parallel: bool,
}

impl DatelineMasker {
    /// Masker with the 180° threshold, running sequentially.
    pub fn new() -> Self {
        Self {
            threshold_deg: DATELINE_SPAN_THRESHOLD_DEG,
            parallel: false,
        }
    }

    /// Overrides the span threshold. Must be finite and positive.
    pub fn with_threshold(mut self, threshold_deg: f64) -> TrimapResult<Self> {
        if !threshold_deg.is_finite() || threshold_deg <= 0.0 {
            return Err(TrimapError::InvalidConfig(format!(
                "Dateline threshold must be a positive number of degrees, got {}",
                threshold_deg
            )));
        }
        self.threshold_deg = threshold_deg;
        Ok(self)
    }

    /// Splits the per-triangle test across the rayon pool. Output is identical.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    pub fn threshold_deg(&self) -> f64 {
        self.threshold_deg
    }

    /// Returns true if a triangle with these vertex longitudes is masked.
    #[inline]
    pub fn crosses_seam(&self, lons: [f64; 3]) -> bool {
        max_lon_span(lons) > self.threshold_deg
    }

    /// Computes the mask without touching the triangulation.
    pub fn compute(&self, tri: &Triangulation) -> Vec<bool> {
        let n = tri.triangle_count();
        if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|t| self.crosses_seam(tri.triangle_lons(t)))
                .collect()
        } else {
            (0..n).map(|t| self.crosses_seam(tri.triangle_lons(t))).collect()
        }
    }

    /// Computes the mask and writes it into `tri`, replacing any prior mask.
    ///
    /// Idempotent: the mask depends only on point longitudes.
    pub fn apply(&self, tri: &mut Triangulation) -> TrimapResult<MaskSummary> {
        let mask = self.compute(tri);
        let masked = mask.iter().filter(|&&hidden| hidden).count();
        tri.set_mask(mask)?;

        let summary = MaskSummary {
            triangles: tri.triangle_count(),
            masked,
            threshold_deg: self.threshold_deg,
        };

        tracing::debug!(
            triangles = summary.triangles,
            masked = summary.masked,
            threshold_deg = summary.threshold_deg,
            "dateline mask applied"
        );
        if summary.masked_fraction() > SUSPICIOUS_MASKED_FRACTION {
            tracing::warn!(
                masked = summary.masked,
                triangles = summary.triangles,
                "large share of triangles masked; check that longitudes use a [-180, 180] convention"
            );
        }

        Ok(summary)
    }
}

impl Default for DatelineMasker {
    fn default() -> Self {
        Self::new()
    }
}
