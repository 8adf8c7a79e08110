//! Linear value normalization with saturation at the range ends.

use serde::Serialize;
use trimap_types::{TrimapError, TrimapResult};

/// Where a value falls relative to `[vmin, vmax]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    Below,
    Within,
    Above,
}

/// Maps `[vmin, vmax]` linearly onto `[0, 1]`, clamping outside values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalize {
    vmin: f64,
    vmax: f64,
}

impl Normalize {
    /// Requires finite bounds with `vmin <= vmax`.
    pub fn new(vmin: f64, vmax: f64) -> TrimapResult<Self> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Err(TrimapError::InvalidConfig(format!(
                "Normalization bounds must be finite, got [{}, {}]",
                vmin, vmax
            )));
        }
        if vmin > vmax {
            return Err(TrimapError::InvalidConfig(format!(
                "vmin ({}) must not exceed vmax ({})",
                vmin, vmax
            )));
        }
        Ok(Self { vmin, vmax })
    }

    #[inline]
    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    #[inline]
    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Position of `value` in `[0, 1]`. A degenerate range maps everything to 0.
    #[inline]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.vmin) / span).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn saturation(&self, value: f64) -> Saturation {
        if value < self.vmin {
            Saturation::Below
        } else if value > self.vmax {
            Saturation::Above
        } else {
            Saturation::Within
        }
    }
}
