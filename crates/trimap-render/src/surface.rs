//! Map surface trait and the headless surface.
//!
//! A surface is the external collaborator that owns pixels: projection,
//! figure size, titles, colorbars, and file export. Renderers hand it one
//! draw call per layer; the surface does the rest.

use trimap_mesh::Triangulation;
use trimap_types::{Crs, GeoExtent, TriangleId, TrimapResult};

use crate::color::Rgb;
use crate::colormap::Colormap;
use crate::norm::Normalize;

/// A triangle as `[[lon, lat]; 3]` in degrees.
pub(crate) type Corners = [[f64; 2]; 3];

/// Vertex coordinates of triangle `t`.
pub(crate) fn corners(tri: &Triangulation, t: TriangleId) -> Corners {
    let lons = tri.triangle_lons(t.index());
    let lats = tri.triangle_lats(t.index());
    [[lons[0], lats[0]], [lons[1], lats[1]], [lons[2], lats[2]]]
}

/// One flat-shaded face: the triangle, its cell value, and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredFace {
    pub triangle: TriangleId,
    pub value: f64,
    pub color: Rgb,
}

/// What a surface needs to draw a colorbar for a face layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLegend {
    pub colormap: Colormap,
    pub norm: Normalize,
    pub label: Option<String>,
}

/// Flat-shaded faces of a masked triangulation.
///
/// Masked triangles are absent from `faces`; the triangulation (points,
/// index, mask) is passed along for surfaces that want the whole mesh.
pub struct FaceDrawCall<'a> {
    pub crs: Crs,
    pub extent: Option<GeoExtent>,
    pub triangulation: &'a Triangulation,
    pub faces: Vec<ColoredFace>,
    pub legend: ColorLegend,
}

/// Outlines of the listed triangles with a single stroke style.
pub struct EdgeDrawCall<'a> {
    pub crs: Crs,
    pub extent: Option<GeoExtent>,
    pub triangulation: &'a Triangulation,
    pub triangles: Vec<TriangleId>,
    pub line_width: f64,
    pub color: Rgb,
}

/// Trait for map rendering surfaces.
///
/// # Implementations
/// - [`HeadlessSurface`]: Records calls in memory (tests, dry runs)
/// - [`crate::JsonSceneExporter`]: Writes every layer to a JSON scene
/// - [`crate::SvgMapExporter`]: Equirectangular SVG image
pub trait MapSurface: Send {
    /// Draw a layer of flat-shaded faces.
    fn draw_faces(&mut self, call: &FaceDrawCall<'_>) -> TrimapResult<()>;

    /// Draw a layer of triangle outlines.
    fn draw_edges(&mut self, call: &EdgeDrawCall<'_>) -> TrimapResult<()>;

    /// Finalize output (write files, flush buffers).
    fn finalize(&mut self) -> TrimapResult<()>;

    /// Returns the surface name.
    fn name(&self) -> &str;

    /// Returns the number of draw calls received.
    fn call_count(&self) -> u32;
}

/// Headless surface: keeps the most recent layers in memory.
///
/// Used for tests and dry runs where no file should be produced.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    calls: u32,
    finalized: bool,
    last_faces: Vec<ColoredFace>,
    last_crs: Option<Crs>,
    last_extent: Option<GeoExtent>,
    last_edges: Vec<TriangleId>,
}

impl HeadlessSurface {
    /// Creates an empty headless surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Faces of the most recent face call.
    pub fn last_faces(&self) -> &[ColoredFace] {
        &self.last_faces
    }

    /// Triangles of the most recent edge call.
    pub fn last_edges(&self) -> &[TriangleId] {
        &self.last_edges
    }

    /// CRS of the most recent call of either kind.
    pub fn last_crs(&self) -> Option<Crs> {
        self.last_crs
    }

    /// Extent of the most recent call of either kind.
    pub fn last_extent(&self) -> Option<GeoExtent> {
        self.last_extent
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl MapSurface for HeadlessSurface {
    fn draw_faces(&mut self, call: &FaceDrawCall<'_>) -> TrimapResult<()> {
        self.calls += 1;
        self.last_faces = call.faces.clone();
        self.last_crs = Some(call.crs);
        self.last_extent = call.extent;
        Ok(())
    }

    fn draw_edges(&mut self, call: &EdgeDrawCall<'_>) -> TrimapResult<()> {
        self.calls += 1;
        self.last_edges = call.triangles.clone();
        self.last_crs = Some(call.crs);
        self.last_extent = call.extent;
        Ok(())
    }

    fn finalize(&mut self) -> TrimapResult<()> {
        self.finalized = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn call_count(&self) -> u32 {
        self.calls
    }
}
