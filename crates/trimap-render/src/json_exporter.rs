//! JSON scene exporter: writes every draw call to one JSON document.
//!
//! Implements the `MapSurface` trait. Each layer is captured with explicit
//! triangle vertex coordinates so the file is self-contained, then the
//! whole scene is serialized on `finalize()`. Nothing is written before
//! that, so a failed render leaves no file behind.

use serde::Serialize;
use trimap_types::{Crs, GeoExtent, TrimapError, TrimapResult};

use crate::color::Rgb;
use crate::surface::{corners, Corners, EdgeDrawCall, FaceDrawCall, MapSurface};

#[derive(Serialize)]
struct FaceRecord {
    cell: u32,
    value: f64,
    color: Rgb,
    vertices: Corners,
}

#[derive(Serialize)]
struct LegendRecord {
    colormap: String,
    vmin: f64,
    vmax: f64,
    label: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Layer {
    Faces {
        crs: Crs,
        extent: Option<GeoExtent>,
        legend: LegendRecord,
        faces: Vec<FaceRecord>,
    },
    Edges {
        crs: Crs,
        extent: Option<GeoExtent>,
        line_width: f64,
        color: Rgb,
        triangles: Vec<Corners>,
    },
}

/// Complete scene for JSON export.
#[derive(Serialize)]
struct Scene<'a> {
    title: Option<&'a str>,
    layers: &'a [Layer],
}

/// Exports map layers to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonSceneExporter::new("scene.json").with_title("T2M");
/// FieldRenderer::render(&grid, &field, &params, &mut exporter)?;
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonSceneExporter {
    output_path: String,
    title: Option<String>,
    layers: Vec<Layer>,
}

impl JsonSceneExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            title: None,
            layers: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Serializes the captured scene without writing it.
    pub fn to_json(&self) -> TrimapResult<String> {
        let scene = Scene {
            title: self.title.as_deref(),
            layers: &self.layers,
        };
        serde_json::to_string(&scene).map_err(|e| {
            TrimapError::Serialization(format!("JSON serialization failed: {e}"))
        })
    }
}

impl MapSurface for JsonSceneExporter {
    fn draw_faces(&mut self, call: &FaceDrawCall<'_>) -> TrimapResult<()> {
        let faces = call
            .faces
            .iter()
            .map(|f| FaceRecord {
                cell: f.triangle.cell().0,
                value: f.value,
                color: f.color,
                vertices: corners(call.triangulation, f.triangle),
            })
            .collect();
        self.layers.push(Layer::Faces {
            crs: call.crs,
            extent: call.extent,
            legend: LegendRecord {
                colormap: call.legend.colormap.name(),
                vmin: call.legend.norm.vmin(),
                vmax: call.legend.norm.vmax(),
                label: call.legend.label.clone(),
            },
            faces,
        });
        Ok(())
    }

    fn draw_edges(&mut self, call: &EdgeDrawCall<'_>) -> TrimapResult<()> {
        self.layers.push(Layer::Edges {
            crs: call.crs,
            extent: call.extent,
            line_width: call.line_width,
            color: call.color,
            triangles: call
                .triangles
                .iter()
                .map(|&t| corners(call.triangulation, t))
                .collect(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> TrimapResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path, layers = self.layers.len(), "scene written");
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn call_count(&self) -> u32 {
        self.layers.len() as u32
    }
}
