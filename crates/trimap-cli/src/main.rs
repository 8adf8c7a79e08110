//! trimap CLI: plot, inspect, and validate geodesic triangle grids.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "trimap")]
#[command(version, about = "trimap: flat-shaded maps of triangular geodesic grids")]
struct Cli {
    /// Log per-stage statistics (debug level) unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a plot job.
    Plot {
        /// Path to plot job (TOML).
        #[arg(short, long, default_value = "plot.toml")]
        config: String,
    },

    /// Print statistics for a grid file.
    Inspect {
        /// Path to grid file (JSON).
        path: String,

        /// Dateline masking threshold in degrees.
        #[arg(long, default_value_t = trimap_types::constants::DATELINE_SPAN_THRESHOLD_DEG)]
        threshold: f64,
    },

    /// Validate a plot job or grid file.
    Validate {
        /// Path to plot job (.toml) or grid (.json).
        path: String,
    },

    /// Write a synthetic icosahedral grid and a temperature field.
    Demo {
        /// Subdivisions per icosahedron edge (20·n² cells).
        #[arg(short, long, default_value_t = 8)]
        subdivisions: usize,

        /// Output grid file (JSON).
        #[arg(short, long, default_value = "demo_grid.json")]
        out: String,

        /// Output field file (JSON, Kelvin).
        #[arg(short, long)]
        field_out: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Plot { config } => commands::plot(&config),
        Commands::Inspect { path, threshold } => commands::inspect(&path, threshold),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Demo {
            subdivisions,
            out,
            field_out,
        } => commands::demo(subdivisions, &out, field_out.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
