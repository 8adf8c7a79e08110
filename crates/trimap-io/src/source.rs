//! Grid and field data sources.
//!
//! The renderers never read files themselves; a caller picks a source and
//! hands the loaded arrays over. Failures surface as [`TrimapError::Source`]
//! (could not obtain the data) or [`TrimapError::Serialization`] (data was
//! not in the expected format).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use trimap_mesh::CellVertexArray;
use trimap_render::FieldContext;
use trimap_types::{TrimapError, TrimapResult};

use crate::contract::{FieldFile, GridFile};

/// Supplies per-cell vertex coordinates (radians).
pub trait GridDataSource {
    fn load_cells(&self) -> TrimapResult<CellVertexArray>;

    /// Short description for logs, e.g. a file path.
    fn describe(&self) -> String;
}

/// Supplies one scalar field aligned with a grid's cells.
pub trait FieldDataSource {
    fn load_field(&self) -> TrimapResult<FieldContext>;

    fn describe(&self) -> String;
}

/// Reads a [`GridFile`] from JSON.
#[derive(Debug, Clone)]
pub struct JsonGridSource {
    path: PathBuf,
}

impl JsonGridSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the raw file contract without converting it.
    pub fn read(&self) -> TrimapResult<GridFile> {
        read_json(&self.path)
    }
}

impl GridDataSource for JsonGridSource {
    fn load_cells(&self) -> TrimapResult<CellVertexArray> {
        let file = self.read()?;
        let cells = file.to_cells()?;
        tracing::debug!(path = %self.path.display(), cells = cells.ncell(), "grid loaded");
        Ok(cells)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads a [`FieldFile`] from JSON.
#[derive(Debug, Clone)]
pub struct JsonFieldSource {
    path: PathBuf,
}

impl JsonFieldSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FieldDataSource for JsonFieldSource {
    fn load_field(&self) -> TrimapResult<FieldContext> {
        let file: FieldFile = read_json(&self.path)?;
        let field = file.to_field();
        tracing::debug!(path = %self.path.display(), field = field.name(), values = field.len(), "field loaded");
        Ok(field)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> TrimapResult<T> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| TrimapError::Source(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| TrimapError::Serialization(format!("{}: {}", path.display(), e)))
}
