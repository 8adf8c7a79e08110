//! Flat-shaded rendering of cell-centered fields.
//!
//! Each unmasked triangle gets one color: its cell value normalized into
//! `[vmin, vmax]` (saturating outside) and sampled from the colormap.
//! Masked triangles are left out of the draw call entirely.

use serde::Serialize;
use trimap_mesh::Triangulation;
use trimap_types::{Crs, GeoExtent, TriangleId, TrimapResult};

use crate::colormap::Colormap;
use crate::context::{FieldContext, GridContext};
use crate::norm::{Normalize, Saturation};
use crate::surface::{ColorLegend, ColoredFace, FaceDrawCall, MapSurface};

/// Per-call render parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub colormap: Colormap,
    pub norm: Normalize,
    pub crs: Crs,
    /// Bounding box forwarded to the surface for clipping/zoom.
    pub extent: Option<GeoExtent>,
    /// Colorbar label, e.g. `2 m Temperature [C]`.
    pub label: Option<String>,
}

impl RenderParams {
    /// Parameters with the plate carrée CRS, no extent, and no label.
    pub fn new(colormap: Colormap, norm: Normalize) -> Self {
        Self {
            colormap,
            norm,
            crs: Crs::PlateCarree,
            extent: None,
            label: None,
        }
    }

    pub fn with_extent(mut self, extent: GeoExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Counts from one field render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub field: String,
    pub faces_drawn: usize,
    pub omitted_masked: usize,
    /// Faces left out because their value was NaN or infinite.
    pub omitted_invalid: usize,
    pub saturated_low: usize,
    pub saturated_high: usize,
}

/// Stateless field renderer; may be called repeatedly on the same grid.
pub struct FieldRenderer;

impl FieldRenderer {
    /// Computes the (triangle → color) assignment without drawing.
    ///
    /// Errors: `Precondition` if `tri` is Unmasked, `ShapeMismatch` if
    /// `field` does not have one value per triangle.
    pub fn assign_colors(
        tri: &Triangulation,
        field: &FieldContext,
        params: &RenderParams,
    ) -> TrimapResult<(Vec<ColoredFace>, RenderReport)> {
        let mask = tri.require_mask("Field rendering")?;
        field.check_len(tri.triangle_count())?;

        let mut report = RenderReport {
            field: field.name().to_string(),
            ..Default::default()
        };
        let mut faces = Vec::with_capacity(tri.triangle_count().saturating_sub(tri.masked_count()));

        for (t, (&hidden, &value)) in mask.iter().zip(field.values()).enumerate() {
            if hidden {
                report.omitted_masked += 1;
                continue;
            }
            if !value.is_finite() {
                report.omitted_invalid += 1;
                continue;
            }
            match params.norm.saturation(value) {
                Saturation::Below => report.saturated_low += 1,
                Saturation::Above => report.saturated_high += 1,
                Saturation::Within => {}
            }
            faces.push(ColoredFace {
                triangle: TriangleId(t as u32),
                value,
                color: params.colormap.sample(params.norm.fraction(value)),
            });
        }

        report.faces_drawn = faces.len();
        Ok((faces, report))
    }

    /// Renders `field` over `grid` onto `surface`.
    pub fn render(
        grid: &GridContext,
        field: &FieldContext,
        params: &RenderParams,
        surface: &mut dyn MapSurface,
    ) -> TrimapResult<RenderReport> {
        let tri = grid.triangulation();
        let (faces, report) = Self::assign_colors(tri, field, params)?;

        let call = FaceDrawCall {
            crs: params.crs,
            extent: params.extent,
            triangulation: tri,
            faces,
            legend: ColorLegend {
                colormap: params.colormap,
                norm: params.norm,
                label: params.label.clone(),
            },
        };
        surface.draw_faces(&call)?;

        tracing::debug!(
            grid = grid.name(),
            field = %report.field,
            surface = surface.name(),
            faces = report.faces_drawn,
            masked = report.omitted_masked,
            invalid = report.omitted_invalid,
            "field rendered"
        );

        Ok(report)
    }
}
