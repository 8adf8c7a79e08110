//! Explicit grid and field handles passed into renderers.
//!
//! A [`GridContext`] is built once per grid and reused for every field; a
//! [`FieldContext`] holds one variable at one time step, positionally
//! aligned with the grid's cells.

use trimap_mesh::{CellVertexArray, DatelineMasker, MaskSummary, Triangulation};
use trimap_types::{Scalar, TrimapError, TrimapResult};

/// A named triangulation, usually already masked.
#[derive(Debug, Clone)]
pub struct GridContext {
    name: String,
    triangulation: Triangulation,
    mask_summary: Option<MaskSummary>,
}

impl GridContext {
    /// Wraps an existing triangulation as-is, masked or not.
    pub fn new(name: impl Into<String>, triangulation: Triangulation) -> Self {
        Self {
            name: name.into(),
            triangulation,
            mask_summary: None,
        }
    }

    /// Expands `cells`, builds the triangulation, and applies `masker`.
    pub fn build(
        name: impl Into<String>,
        cells: &CellVertexArray,
        masker: &DatelineMasker,
    ) -> TrimapResult<Self> {
        let mut triangulation = Triangulation::from_cells(cells)?;
        let summary = masker.apply(&mut triangulation)?;
        Ok(Self {
            name: name.into(),
            triangulation,
            mask_summary: Some(summary),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    /// Number of grid cells (one triangle each).
    #[inline]
    pub fn ncell(&self) -> usize {
        self.triangulation.triangle_count()
    }

    /// Statistics of the mask applied by [`GridContext::build`].
    pub fn mask_summary(&self) -> Option<&MaskSummary> {
        self.mask_summary.as_ref()
    }

    /// Creates a field checked against this grid's cell count.
    pub fn field(
        &self,
        name: impl Into<String>,
        units: impl Into<String>,
        values: Vec<f64>,
    ) -> TrimapResult<FieldContext> {
        let field = FieldContext::new(name, units, values);
        field.check_len(self.ncell())?;
        Ok(field)
    }
}

/// One scalar value per cell, plus descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldContext {
    name: String,
    units: String,
    values: Vec<Scalar>,
}

impl FieldContext {
    pub fn new(name: impl Into<String>, units: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
            values,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn units(&self) -> &str {
        &self.units
    }

    #[inline]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails with `ShapeMismatch` unless there are exactly `ncell` values.
    pub fn check_len(&self, ncell: usize) -> TrimapResult<()> {
        if self.values.len() != ncell {
            return Err(TrimapError::shape_mismatch(
                format!("field '{}'", self.name),
                ncell,
                self.values.len(),
            ));
        }
        Ok(())
    }

    /// Applies `f` to every value and relabels the units.
    pub fn map_values(mut self, units: impl Into<String>, f: impl Fn(Scalar) -> Scalar) -> Self {
        for v in &mut self.values {
            *v = f(*v);
        }
        self.units = units.into();
        self
    }
}
