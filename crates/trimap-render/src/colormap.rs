//! Named continuous colormaps.
//!
//! Each map is a short table of sRGB stops on `[0, 1]`; sampling linearly
//! interpolates between neighbouring stops. A `_r` suffix on the name
//! reverses the map, as in matplotlib.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trimap_types::{TrimapError, TrimapResult};

use crate::color::Rgb;

/// A color stop along the normalized `[0, 1]` domain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColorStop {
    t: f64,
    rgb: Rgb,
}

const fn stop(t: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop {
        t,
        rgb: Rgb([r, g, b]),
    }
}

const COOLWARM: [ColorStop; 9] = [
    stop(0.0, 59, 76, 192),
    stop(0.125, 98, 130, 234),
    stop(0.25, 141, 176, 254),
    stop(0.375, 184, 208, 249),
    stop(0.5, 221, 221, 221),
    stop(0.625, 245, 196, 173),
    stop(0.75, 244, 154, 123),
    stop(0.875, 222, 96, 77),
    stop(1.0, 180, 4, 38),
];

const VIRIDIS: [ColorStop; 9] = [
    stop(0.0, 68, 1, 84),
    stop(0.125, 71, 44, 122),
    stop(0.25, 59, 81, 139),
    stop(0.375, 44, 113, 142),
    stop(0.5, 33, 144, 141),
    stop(0.625, 39, 173, 129),
    stop(0.75, 92, 200, 99),
    stop(0.875, 170, 220, 50),
    stop(1.0, 253, 231, 37),
];

const RDBU: [ColorStop; 9] = [
    stop(0.0, 103, 0, 31),
    stop(0.125, 178, 24, 43),
    stop(0.25, 214, 96, 77),
    stop(0.375, 244, 165, 130),
    stop(0.5, 247, 247, 247),
    stop(0.625, 146, 197, 222),
    stop(0.75, 67, 147, 195),
    stop(0.875, 33, 102, 172),
    stop(1.0, 5, 48, 97),
];

const GREYS: [ColorStop; 2] = [stop(0.0, 255, 255, 255), stop(1.0, 0, 0, 0)];

/// Built-in colormap families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColormapKind {
    Coolwarm,
    Viridis,
    RdBu,
    Greys,
}

impl ColormapKind {
    /// All built-in maps.
    pub fn all() -> &'static [ColormapKind] {
        &[
            ColormapKind::Coolwarm,
            ColormapKind::Viridis,
            ColormapKind::RdBu,
            ColormapKind::Greys,
        ]
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ColormapKind::Coolwarm => "coolwarm",
            ColormapKind::Viridis => "viridis",
            ColormapKind::RdBu => "rdbu",
            ColormapKind::Greys => "greys",
        }
    }

    fn stops(self) -> &'static [ColorStop] {
        match self {
            ColormapKind::Coolwarm => &COOLWARM,
            ColormapKind::Viridis => &VIRIDIS,
            ColormapKind::RdBu => &RDBU,
            ColormapKind::Greys => &GREYS,
        }
    }
}

/// A colormap: a built-in family, optionally reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colormap {
    pub kind: ColormapKind,
    pub reversed: bool,
}

impl Colormap {
    pub const COOLWARM: Colormap = Colormap::new(ColormapKind::Coolwarm);

    pub const fn new(kind: ColormapKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    /// Looks up a map by name (case-insensitive, optional `_r` suffix).
    pub fn from_name(name: &str) -> TrimapResult<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let kind = ColormapKind::all()
            .iter()
            .copied()
            .find(|k| k.name() == base)
            .ok_or_else(|| {
                let available: Vec<&str> = ColormapKind::all().iter().map(|k| k.name()).collect();
                TrimapError::InvalidConfig(format!(
                    "Unknown colormap: '{}'. Available: {}",
                    name,
                    available.join(", ")
                ))
            })?;
        Ok(Self { kind, reversed })
    }

    /// Name as accepted by [`Colormap::from_name`].
    pub fn name(&self) -> String {
        if self.reversed {
            format!("{}_r", self.kind.name())
        } else {
            self.kind.name().to_string()
        }
    }

    /// Samples the map at `t`, clamped to `[0, 1]`. NaN samples the low end.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let stops = self.kind.stops();
        let last = stops.len() - 1;
        if t >= stops[last].t {
            return stops[last].rgb;
        }
        // linear scan is fine for a handful of stops
        for k in 0..last {
            let (a, b) = (stops[k], stops[k + 1]);
            if t <= b.t {
                let local = if b.t > a.t { (t - a.t) / (b.t - a.t) } else { 0.0 };
                return a.rgb.lerp(b.rgb, local);
            }
        }
        stops[last].rgb
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::COOLWARM
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Colormap {
    type Err = TrimapError;

    fn from_str(s: &str) -> TrimapResult<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Colormap {
    type Error = TrimapError;

    fn try_from(s: String) -> TrimapResult<Self> {
        Self::from_name(&s)
    }
}

impl From<Colormap> for String {
    fn from(c: Colormap) -> Self {
        c.name()
    }
}
