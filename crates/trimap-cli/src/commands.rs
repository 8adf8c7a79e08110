//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use trimap_io::source::{FieldDataSource, GridDataSource, JsonFieldSource, JsonGridSource};
use trimap_io::{validate_grid_file, validate_job, FieldFile, GridFile, PlotJob};
use trimap_mesh::generators::{cell_centroids_deg, icosahedral_grid};
use trimap_mesh::DatelineMasker;
use trimap_render::{
    FieldRenderer, GridContext, JsonSceneExporter, MapSurface, SvgMapExporter, WireframeRenderer,
};
use trimap_telemetry::{EventBus, EventKind, RenderEvent, TracingSink};
use trimap_types::constants::KELVIN_OFFSET;
use trimap_types::{Crs, TrimapError};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Render a plot job.
pub fn plot(config_path: &str) -> CliResult {
    let started = Instant::now();
    println!("trimap Plot");
    println!("───────────");
    println!("Config: {config_path}");
    println!();

    let job = PlotJob::load(Path::new(config_path))?;
    validate_job(&job)?;

    let job_name = if job.title.is_empty() {
        config_path.to_string()
    } else {
        job.title.clone()
    };
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let grid_source = JsonGridSource::new(&job.grid.path);
    let cells = grid_source.load_cells()?;
    let grid = GridContext::build(grid_source.describe(), &cells, &job.masker()?)?;
    bus.emit(RenderEvent::new(
        &job_name,
        EventKind::GridExpanded {
            cells: cells.ncell(),
            points: grid.triangulation().point_count(),
        },
    ));
    if let Some(summary) = grid.mask_summary() {
        bus.emit(RenderEvent::new(
            &job_name,
            EventKind::MaskComputed {
                triangles: summary.triangles,
                masked: summary.masked,
                threshold_deg: summary.threshold_deg,
            },
        ));
    }

    let mut surface = open_surface(&job)?;

    if let (Some(section), Some(params)) = (&job.field, job.render_params()?) {
        let raw = JsonFieldSource::new(&section.path).load_field()?;
        let field = section.conversion.apply(raw);
        let report = FieldRenderer::render(&grid, &field, &params, surface.as_mut())?;
        println!(
            "Field '{}': {} faces ({} masked, {} missing, {} below / {} above range)",
            report.field,
            report.faces_drawn,
            report.omitted_masked,
            report.omitted_invalid,
            report.saturated_low,
            report.saturated_high,
        );
        bus.emit(RenderEvent::new(
            &job_name,
            EventKind::FieldRendered {
                field: report.field,
                faces_drawn: report.faces_drawn,
                omitted_masked: report.omitted_masked,
                omitted_invalid: report.omitted_invalid,
                saturated_low: report.saturated_low,
                saturated_high: report.saturated_high,
            },
        ));
    }

    if let Some(style) = job.wireframe_style()? {
        let report =
            WireframeRenderer::render(&grid, &style, Crs::PlateCarree, job.extent, surface.as_mut())?;
        println!(
            "Wireframe: {} triangles ({} masked)",
            report.triangles_drawn, report.omitted_masked
        );
        bus.emit(RenderEvent::new(
            &job_name,
            EventKind::WireframeRendered {
                triangles_drawn: report.triangles_drawn,
                omitted_masked: report.omitted_masked,
            },
        ));
    }

    surface.finalize()?;
    bus.emit(RenderEvent::new(
        &job_name,
        EventKind::SurfaceFinalized {
            surface: surface.name().to_string(),
            calls: surface.call_count(),
            wall_time: started.elapsed().as_secs_f64(),
        },
    ));
    bus.finalize();

    println!();
    println!("Written: {}", job.output.display());
    Ok(())
}

/// Picks the surface from the output file extension.
fn open_surface(job: &PlotJob) -> Result<Box<dyn MapSurface>, TrimapError> {
    let output = job.output.to_string_lossy();
    let ext = job
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let mut svg = SvgMapExporter::new(&output)
                .with_size(job.width, job.height)?
                .with_title(job.title.clone());
            if let Some(extent) = job.extent {
                svg = svg.with_extent(extent);
            }
            Ok(Box::new(svg))
        }
        Some("json") => Ok(Box::new(
            JsonSceneExporter::new(&output).with_title(job.title.clone()),
        )),
        _ => Err(TrimapError::InvalidConfig(format!(
            "Unsupported output '{output}'. Use .svg (image) or .json (scene)."
        ))),
    }
}

/// Print grid statistics.
pub fn inspect(path: &str, threshold: f64) -> CliResult {
    println!("trimap Grid Inspector");
    println!("─────────────────────");
    println!();

    let source = JsonGridSource::new(path);
    let cells = source.load_cells()?;
    let masker = DatelineMasker::new().with_threshold(threshold)?;
    let grid = GridContext::build(source.describe(), &cells, &masker)?;
    let tri = grid.triangulation();

    println!("Cells:        {}", grid.ncell());
    println!("Points:       {}", tri.point_count());
    if let Some(summary) = grid.mask_summary() {
        println!(
            "Masked:       {} ({:.2}%, span > {}°)",
            summary.masked,
            summary.masked_fraction() * 100.0,
            summary.threshold_deg
        );
    }
    if let Some((lo, hi)) = tri.lon_range() {
        println!("Lon range:    [{lo:.4}, {hi:.4}]");
    }
    if let Some((lo, hi)) = tri.lat_range() {
        println!("Lat range:    [{lo:.4}, {hi:.4}]");
    }

    Ok(())
}

/// Validate a plot job or a grid file.
pub fn validate(path: &str) -> CliResult {
    println!("trimap Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating job: {path}");
        let job = PlotJob::load(Path::new(path))?;
        if let Err(e) = validate_job(&job) {
            println!("❌ Job validation failed.");
            return Err(e.into());
        }
        println!("✅ Job is valid.");
    } else if path.ends_with(".json") {
        println!("Validating grid: {path}");
        let grid = JsonGridSource::new(path).read()?;
        match validate_grid_file(&grid) {
            Ok(ncell) => println!("✅ Grid is valid ({ncell} cells)."),
            Err(e) => {
                println!("❌ Grid validation failed.");
                return Err(e.into());
            }
        }
    } else {
        return Err(TrimapError::InvalidConfig(format!(
            "Unsupported file '{path}'. Use .toml (plot job) or .json (grid)."
        ))
        .into());
    }

    Ok(())
}

/// Write a synthetic grid and, optionally, a temperature-like field.
pub fn demo(subdivisions: usize, out: &str, field_out: Option<&str>) -> CliResult {
    let cells = icosahedral_grid(subdivisions)?;
    let name = format!("icosahedral_n{subdivisions}");
    GridFile::from_cells(&name, &cells).save(Path::new(out))?;
    println!("Grid:  {out} ({} cells)", cells.ncell());

    if let Some(field_path) = field_out {
        let values: Vec<f64> = cell_centroids_deg(&cells)
            .into_iter()
            .map(|(lon, lat)| demo_temperature(lon, lat))
            .collect();
        FieldFile::from_values("t2m", "K", &values).save(Path::new(field_path))?;
        println!("Field: {field_path} (t2m, K)");
    }

    Ok(())
}

/// Zonal temperature profile with a weak wave, in Kelvin.
fn demo_temperature(lon_deg: f64, lat_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    KELVIN_OFFSET + 30.0 * lat.cos().powi(2) - 25.0 + 5.0 * (3.0 * lon).sin() * lat.cos()
}
