//! Equirectangular SVG surface.
//!
//! Longitude and latitude map linearly onto the plot area, which shows the
//! configured extent (or the first extent received, or the whole globe).
//! The surface owns figure size, title, colorbar, and the output file,
//! which is written only by `finalize()`.

use std::fmt::Write as _;

use trimap_types::constants::{DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH};
use trimap_types::{GeoExtent, TrimapError, TrimapResult};

use crate::color::Rgb;
use crate::surface::{corners, ColorLegend, Corners, EdgeDrawCall, FaceDrawCall, MapSurface};

const MARGIN: f64 = 20.0;
const TITLE_BAND: f64 = 40.0;
const COLORBAR_BAND: f64 = 90.0;
const COLORBAR_WIDTH: f64 = 15.0;
/// Colorbar height as a fraction of the plot height.
const COLORBAR_SHRINK: f64 = 0.8;
const COLORBAR_SAMPLES: usize = 11;

enum Shape {
    Fill { corners: Corners, color: Rgb },
    Stroke { corners: Corners, color: Rgb, width: f64 },
}

/// Writes map layers to an SVG image.
pub struct SvgMapExporter {
    output_path: String,
    width: u32,
    height: u32,
    title: Option<String>,
    extent: Option<GeoExtent>,
    legend: Option<ColorLegend>,
    shapes: Vec<Shape>,
    calls: u32,
}

impl SvgMapExporter {
    /// Creates an exporter with the default figure size.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
            title: None,
            extent: None,
            legend: None,
            shapes: Vec::new(),
            calls: 0,
        }
    }

    /// Sets the figure size in pixels. Both sides must be non-zero.
    pub fn with_size(mut self, width: u32, height: u32) -> TrimapResult<Self> {
        if width == 0 || height == 0 {
            return Err(TrimapError::InvalidConfig(format!(
                "Figure size must be non-zero, got {}x{}",
                width, height
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixes the visible extent, overriding extents carried by draw calls.
    pub fn with_extent(mut self, extent: GeoExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Renders the document without writing it.
    pub fn to_svg(&self) -> String {
        let viewport = self.extent.unwrap_or(GeoExtent::GLOBAL);
        let (w, h) = (self.width as f64, self.height as f64);

        let left = MARGIN;
        let top = if self.title.is_some() { TITLE_BAND } else { MARGIN };
        let right = if self.legend.is_some() { COLORBAR_BAND } else { MARGIN };
        let plot_w = (w - left - right).max(1.0);
        let plot_h = (h - top - MARGIN).max(1.0);

        let project = |p: [f64; 2]| -> (f64, f64) {
            (
                left + (p[0] - viewport.lon_min) / viewport.width() * plot_w,
                top + (viewport.lat_max - p[1]) / viewport.height() * plot_h,
            )
        };
        let points = |c: &Corners| -> String {
            c.iter()
                .map(|&p| {
                    let (x, y) = project(p);
                    format!("{:.2},{:.2}", x, y)
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
        let _ = writeln!(
            svg,
            r#"<defs><clipPath id="plot"><rect x="{left:.2}" y="{top:.2}" width="{plot_w:.2}" height="{plot_h:.2}"/></clipPath></defs>"#
        );

        let _ = writeln!(svg, r#"<g clip-path="url(#plot)">"#);
        for shape in &self.shapes {
            match shape {
                Shape::Fill { corners, color } => {
                    if !overlaps(&viewport, corners) {
                        continue;
                    }
                    let _ = writeln!(svg, r#"<polygon points="{}" fill="{}"/>"#, points(corners), color);
                }
                Shape::Stroke {
                    corners,
                    color,
                    width,
                } => {
                    if !overlaps(&viewport, corners) {
                        continue;
                    }
                    let _ = writeln!(
                        svg,
                        r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                        points(corners),
                        color,
                        width
                    );
                }
            }
        }
        let _ = writeln!(svg, "</g>");
        let _ = writeln!(
            svg,
            r#"<rect x="{left:.2}" y="{top:.2}" width="{plot_w:.2}" height="{plot_h:.2}" fill="none" stroke="black" stroke-width="0.8"/>"#
        );

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="16">{}</text>"#,
                left + plot_w / 2.0,
                TITLE_BAND * 0.65,
                escape(title)
            );
        }

        if let Some(legend) = &self.legend {
            write_colorbar(&mut svg, legend, left + plot_w + 20.0, top, plot_h * COLORBAR_SHRINK);
        }

        let _ = writeln!(svg, "</svg>");
        svg
    }

    fn adopt_extent(&mut self, extent: Option<GeoExtent>) {
        if self.extent.is_none() {
            self.extent = extent;
        }
    }
}

fn overlaps(viewport: &GeoExtent, c: &Corners) -> bool {
    viewport.overlaps_points(&[c[0][0], c[1][0], c[2][0]], &[c[0][1], c[1][1], c[2][1]])
}

fn write_colorbar(svg: &mut String, legend: &ColorLegend, x: f64, y: f64, height: f64) {
    let _ = writeln!(svg, r#"<defs><linearGradient id="colorbar" x1="0" y1="1" x2="0" y2="0">"#);
    for k in 0..COLORBAR_SAMPLES {
        let t = k as f64 / (COLORBAR_SAMPLES - 1) as f64;
        let _ = writeln!(
            svg,
            r#"<stop offset="{:.1}%" stop-color="{}"/>"#,
            t * 100.0,
            legend.colormap.sample(t)
        );
    }
    let _ = writeln!(svg, "</linearGradient></defs>");
    let _ = writeln!(
        svg,
        r#"<rect x="{x:.2}" y="{y:.2}" width="{}" height="{height:.2}" fill="url(#colorbar)" stroke="black" stroke-width="0.5"/>"#,
        COLORBAR_WIDTH
    );

    let text_x = x + COLORBAR_WIDTH + 4.0;
    let _ = writeln!(
        svg,
        r#"<text x="{text_x:.2}" y="{:.2}" font-family="sans-serif" font-size="11">{}</text>"#,
        y + 10.0,
        legend.norm.vmax()
    );
    let _ = writeln!(
        svg,
        r#"<text x="{text_x:.2}" y="{:.2}" font-family="sans-serif" font-size="11">{}</text>"#,
        y + height,
        legend.norm.vmin()
    );
    if let Some(label) = &legend.label {
        let lx = x - 6.0;
        let ly = y + height / 2.0;
        let _ = writeln!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" transform="rotate(-90 {lx:.2} {ly:.2})" text-anchor="middle" font-family="sans-serif" font-size="12">{}</text>"#,
            escape(label)
        );
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl MapSurface for SvgMapExporter {
    fn draw_faces(&mut self, call: &FaceDrawCall<'_>) -> TrimapResult<()> {
        self.calls += 1;
        self.adopt_extent(call.extent);
        self.legend = Some(call.legend.clone());
        self.shapes.extend(call.faces.iter().map(|f| Shape::Fill {
            corners: corners(call.triangulation, f.triangle),
            color: f.color,
        }));
        Ok(())
    }

    fn draw_edges(&mut self, call: &EdgeDrawCall<'_>) -> TrimapResult<()> {
        self.calls += 1;
        self.adopt_extent(call.extent);
        self.shapes.extend(call.triangles.iter().map(|&t| Shape::Stroke {
            corners: corners(call.triangulation, t),
            color: call.color,
            width: call.line_width,
        }));
        Ok(())
    }

    fn finalize(&mut self) -> TrimapResult<()> {
        std::fs::write(&self.output_path, self.to_svg())?;
        tracing::info!(
            path = %self.output_path,
            shapes = self.shapes.len(),
            "map image written"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "svg_exporter"
    }

    fn call_count(&self) -> u32 {
        self.calls
    }
}
