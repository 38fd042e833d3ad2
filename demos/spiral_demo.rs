//! Multi-arm spiral, one class per arm, rendered flat in 3D.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use vectorviz_datasets::{make_spiral, SpiralConfig};
use vectorviz_demos::{load_config, logging, RenderArgs};

/// Binary name, also the stem of the default output file
const DEMO: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(about = "Generate a multi-arm spiral and render it")]
struct Cli {
    /// JSON file with a spiral config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Points on each arm
    #[arg(long)]
    samples: Option<usize>,

    /// Number of arms
    #[arg(long)]
    classes: Option<usize>,

    #[arg(long)]
    rotations: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    gap_between_spiral: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    gap_between_start_point: Option<f64>,

    /// Sample along the raw angle instead of evenly along the curve
    #[arg(long)]
    raw_interval: bool,

    /// Standard deviation of the Gaussian noise
    #[arg(long)]
    noise: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Height of the plane the spiral is drawn in
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    z: f64,

    #[command(flatten)]
    render: RenderArgs,
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let mut config: SpiralConfig = load_config(cli.config.as_deref())?;
    if let Some(n) = cli.samples {
        config.n_samples_per_class = n;
    }
    if let Some(n) = cli.classes {
        config.n_classes = n;
    }
    if let Some(n) = cli.rotations {
        config.n_rotations = n;
    }
    if let Some(gap) = cli.gap_between_spiral {
        config.gap_between_spiral = gap;
    }
    if let Some(gap) = cli.gap_between_start_point {
        config.gap_between_start_point = gap;
    }
    if cli.raw_interval {
        config.equal_interval = false;
    }
    if cli.noise.is_some() {
        config.noise = cli.noise.into();
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let spiral = make_spiral(&config).context("failed to generate spiral")?;
    info!(
        points = spiral.len(),
        arms = config.n_classes,
        rotations = config.n_rotations,
        seed = config.seed,
        "generated spiral"
    );

    cli.render
        .render(DEMO, "Spiral", &spiral.lift_to_3d(cli.z))
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "spiral demo failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
