//! 8-bit sRGB colors with `#RRGGBB` text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trimap_types::{TrimapError, TrimapResult};

/// sRGB 8-bit triplet. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Parses `#RRGGBB` (leading `#` required, case-insensitive).
    pub fn from_hex(tok: &str) -> TrimapResult<Self> {
        let s = tok.trim();
        let hex = s.strip_prefix('#').ok_or_else(|| {
            TrimapError::InvalidConfig(format!("Color '{}' must look like #RRGGBB", s))
        })?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(TrimapError::InvalidConfig(format!(
                "Color '{}' must have 6 hex digits",
                s
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| TrimapError::InvalidConfig(format!("Color '{}' is not valid hex", s)))
        };
        Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    /// Linear blend in sRGB space, `t` in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)).round().clamp(0.0, 255.0) as u8;
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = TrimapError;

    fn from_str(s: &str) -> TrimapResult<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = TrimapError;

    fn try_from(s: String) -> TrimapResult<Self> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}
