//! Plot-job and data-file contract types.
//!
//! These types define the I/O boundary of trimap. Grids and fields travel
//! as JSON files; plot jobs are TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trimap_mesh::{CellVertexArray, DatelineMasker};
use trimap_render::{Colormap, FieldContext, Normalize, RenderParams, Rgb, WireframeStyle};
use trimap_types::constants::{
    DATELINE_SPAN_THRESHOLD_DEG, DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH, DEFAULT_LINE_WIDTH,
    KELVIN_OFFSET,
};
use trimap_types::{GeoExtent, TrimapError, TrimapResult};

/// A grid as stored on disk: per-cell vertex coordinates in radians.
///
/// Both arrays have shape `(ncell, 3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFile {
    /// Grid name, e.g. `"icon_global_r2b4"`.
    #[serde(default)]
    pub name: String,
    /// Vertex longitudes per cell (radians).
    pub cell_longitude_vertices: Vec<Vec<f64>>,
    /// Vertex latitudes per cell (radians).
    pub cell_latitude_vertices: Vec<Vec<f64>>,
}

impl GridFile {
    /// Captures `cells` for writing.
    pub fn from_cells(name: impl Into<String>, cells: &CellVertexArray) -> Self {
        let mut lon = Vec::with_capacity(cells.ncell());
        let mut lat = Vec::with_capacity(cells.ncell());
        for c in 0..cells.ncell() {
            let (clon, clat) = cells.cell(c);
            lon.push(clon.to_vec());
            lat.push(clat.to_vec());
        }
        Self {
            name: name.into(),
            cell_longitude_vertices: lon,
            cell_latitude_vertices: lat,
        }
    }

    /// Validates the shape and converts into a [`CellVertexArray`].
    pub fn to_cells(&self) -> TrimapResult<CellVertexArray> {
        CellVertexArray::from_nested(&self.cell_longitude_vertices, &self.cell_latitude_vertices)
    }

    #[inline]
    pub fn ncell(&self) -> usize {
        self.cell_longitude_vertices.len()
    }

    /// Writes the grid as pretty JSON.
    pub fn save(&self, path: &Path) -> TrimapResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TrimapError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// A per-cell scalar field as stored on disk.
///
/// Missing values are JSON `null` and load as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFile {
    pub name: String,
    #[serde(default)]
    pub units: String,
    pub values: Vec<Option<f64>>,
}

impl FieldFile {
    /// Captures a field for writing. Non-finite values become `null`.
    pub fn from_values(name: impl Into<String>, units: impl Into<String>, values: &[f64]) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
            values: values
                .iter()
                .map(|&v| if v.is_finite() { Some(v) } else { None })
                .collect(),
        }
    }

    pub fn to_field(&self) -> FieldContext {
        let values = self.values.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        FieldContext::new(self.name.clone(), self.units.clone(), values)
    }

    /// Writes the field as pretty JSON.
    pub fn save(&self, path: &Path) -> TrimapResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TrimapError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Unit conversion applied to a field before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitConversion {
    #[default]
    None,
    /// `value - 273.15`, units relabelled to `C`.
    KelvinToCelsius,
}

impl UnitConversion {
    pub fn apply(self, field: FieldContext) -> FieldContext {
        match self {
            UnitConversion::None => field,
            UnitConversion::KelvinToCelsius => field.map_values("C", |k| k - KELVIN_OFFSET),
        }
    }
}

/// Everything needed to draw one figure: an optional field layer, an
/// optional wireframe overlay, and the masking that both share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotJob {
    #[serde(default)]
    pub title: String,
    /// Output file. The extension selects the surface (`.svg` or `.json`).
    pub output: PathBuf,
    /// Zoom window; `None` shows the whole grid.
    #[serde(default)]
    pub extent: Option<GeoExtent>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    pub grid: GridSection,
    #[serde(default)]
    pub field: Option<FieldSection>,
    #[serde(default)]
    pub wireframe: Option<WireframeSection>,
    #[serde(default)]
    pub masking: MaskingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSection {
    pub path: PathBuf,
}

/// Field layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSection {
    pub path: PathBuf,
    #[serde(default)]
    pub conversion: UnitConversion,
    #[serde(default = "default_colormap")]
    pub colormap: String,
    pub vmin: f64,
    pub vmax: f64,
    /// Colorbar label.
    #[serde(default)]
    pub label: Option<String>,
}

/// Grid-line overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireframeSection {
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_line_color")]
    pub color: String,
}

impl Default for WireframeSection {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            color: default_line_color(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingSection {
    #[serde(default = "default_threshold")]
    pub threshold_deg: f64,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for MaskingSection {
    fn default() -> Self {
        Self {
            threshold_deg: DATELINE_SPAN_THRESHOLD_DEG,
            parallel: false,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_FIGURE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_FIGURE_HEIGHT
}

fn default_colormap() -> String {
    "coolwarm".to_string()
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_line_color() -> String {
    "#000000".to_string()
}

fn default_threshold() -> f64 {
    DATELINE_SPAN_THRESHOLD_DEG
}

impl PlotJob {
    /// Parses a job from TOML text. Does not validate values.
    pub fn from_toml_str(text: &str) -> TrimapResult<Self> {
        toml::from_str(text).map_err(|e| TrimapError::Serialization(e.to_string()))
    }

    /// Reads and parses a job file.
    ///
    /// Relative grid/field/output paths are resolved against the job file's
    /// directory.
    pub fn load(path: &Path) -> TrimapResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut job = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            job.resolve_paths(base);
        }
        Ok(job)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.output);
        resolve(&mut self.grid.path);
        if let Some(field) = self.field.as_mut() {
            resolve(&mut field.path);
        }
    }

    /// The masker described by `[masking]`.
    pub fn masker(&self) -> TrimapResult<DatelineMasker> {
        Ok(DatelineMasker::new()
            .with_threshold(self.masking.threshold_deg)?
            .with_parallel(self.masking.parallel))
    }

    /// Render parameters for the field layer, if the job has one.
    pub fn render_params(&self) -> TrimapResult<Option<RenderParams>> {
        let Some(field) = &self.field else {
            return Ok(None);
        };
        let mut params = RenderParams::new(
            Colormap::from_name(&field.colormap)?,
            Normalize::new(field.vmin, field.vmax)?,
        );
        if let Some(extent) = self.extent {
            params = params.with_extent(extent);
        }
        if let Some(label) = &field.label {
            params = params.with_label(label.clone());
        }
        Ok(Some(params))
    }

    /// Wireframe style, if the job draws grid lines.
    pub fn wireframe_style(&self) -> TrimapResult<Option<WireframeStyle>> {
        self.wireframe
            .as_ref()
            .map(|w| WireframeStyle::new(w.line_width, Rgb::from_hex(&w.color)?))
            .transpose()
    }
}
