//! Plot-job and grid-file validation.
//!
//! Validates configuration before any grid is loaded, catching
//! nonsensical values early with clear diagnostics.

use trimap_types::{TrimapError, TrimapResult};

use crate::contract::{GridFile, PlotJob};

/// Validates a complete plot job.
///
/// Checks:
/// - Output path is present
/// - Extent and figure size are sensible
/// - The job draws at least one layer
/// - Field range and colormap name (if a field layer is present)
/// - Line width and color (if a wireframe layer is present)
/// - Masking threshold
pub fn validate_job(job: &PlotJob) -> TrimapResult<()> {
    if job.output.as_os_str().is_empty() {
        return Err(TrimapError::InvalidConfig("Output path must not be empty".into()));
    }
    if let Some(extent) = &job.extent {
        extent.validate()?;
    }
    if job.width == 0 || job.height == 0 {
        return Err(TrimapError::InvalidConfig(format!(
            "Figure size must be positive, got {}x{}",
            job.width, job.height
        )));
    }
    if job.field.is_none() && job.wireframe.is_none() {
        return Err(TrimapError::InvalidConfig(
            "Job must have a [field] or a [wireframe] section".into(),
        ));
    }

    // Constructing the layer parameters validates them.
    job.render_params()?;
    job.wireframe_style()?;
    job.masker()?;

    Ok(())
}

/// Validates a grid file's shape. Returns the cell count.
///
/// Non-finite vertex coordinates are legal (such cells are never masked and
/// simply draw nothing), but they are reported.
pub fn validate_grid_file(grid: &GridFile) -> TrimapResult<usize> {
    let cells = grid.to_cells()?;
    let non_finite = (0..cells.ncell())
        .filter(|&c| {
            let (lon, lat) = cells.cell(c);
            lon.iter().chain(lat.iter()).any(|v| !v.is_finite())
        })
        .count();
    if non_finite > 0 {
        tracing::warn!(cells = non_finite, "grid has cells with non-finite vertex coordinates");
    }
    Ok(cells.ncell())
}
