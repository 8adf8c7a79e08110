//! Grid wireframe: the outline of every unmasked triangle.

use serde::Serialize;
use trimap_types::constants::DEFAULT_LINE_WIDTH;
use trimap_types::{Crs, GeoExtent, TrimapError, TrimapResult};

use crate::color::Rgb;
use crate::context::GridContext;
use crate::surface::{EdgeDrawCall, MapSurface};

/// Stroke style for grid edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    pub line_width: f64,
    pub color: Rgb,
}

impl WireframeStyle {
    /// Requires a finite, positive line width.
    pub fn new(line_width: f64, color: Rgb) -> TrimapResult<Self> {
        if !line_width.is_finite() || line_width <= 0.0 {
            return Err(TrimapError::InvalidConfig(format!(
                "Line width must be positive, got {}",
                line_width
            )));
        }
        Ok(Self { line_width, color })
    }
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            color: Rgb::BLACK,
        }
    }
}

/// Counts from one wireframe render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WireframeReport {
    pub triangles_drawn: usize,
    pub omitted_masked: usize,
}

/// Draws grid edges. Like field rendering it needs a masked triangulation,
/// since seam-crossing outlines streak across the whole map.
pub struct WireframeRenderer;

impl WireframeRenderer {
    pub fn render(
        grid: &GridContext,
        style: &WireframeStyle,
        crs: Crs,
        extent: Option<GeoExtent>,
        surface: &mut dyn MapSurface,
    ) -> TrimapResult<WireframeReport> {
        let tri = grid.triangulation();
        tri.require_mask("Wireframe rendering")?;

        let triangles: Vec<_> = tri.visible_triangles().collect();
        let report = WireframeReport {
            triangles_drawn: triangles.len(),
            omitted_masked: tri.masked_count(),
        };

        surface.draw_edges(&EdgeDrawCall {
            crs,
            extent,
            triangulation: tri,
            triangles,
            line_width: style.line_width,
            color: style.color,
        })?;

        tracing::debug!(
            grid = grid.name(),
            surface = surface.name(),
            triangles = report.triangles_drawn,
            "wireframe rendered"
        );

        Ok(report)
    }
}
