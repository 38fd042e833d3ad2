//! Two interleaving half circles, lifted into the z = 0 plane and rendered
//! as a 3D scatter plot.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use vectorviz_datasets::{make_moons, MoonsConfig};
use vectorviz_demos::{load_config, logging, RenderArgs};

/// Binary name, also the stem of the default output file
const DEMO: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(about = "Generate the two moons dataset and render it")]
struct Cli {
    /// JSON file with a moons config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total number of points
    #[arg(long)]
    samples: Option<usize>,

    #[arg(long)]
    xy_ratio: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    x_gap: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    y_gap: Option<f64>,

    /// Standard deviation of the Gaussian noise
    #[arg(long)]
    noise: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    render: RenderArgs,
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let mut config: MoonsConfig = load_config(cli.config.as_deref())?;
    if let Some(n_samples) = cli.samples {
        config.n_samples = n_samples;
    }
    if let Some(xy_ratio) = cli.xy_ratio {
        config.xy_ratio = xy_ratio;
    }
    if let Some(x_gap) = cli.x_gap {
        config.x_gap = x_gap;
    }
    if let Some(y_gap) = cli.y_gap {
        config.y_gap = y_gap;
    }
    if cli.noise.is_some() {
        config.noise = cli.noise.into();
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let moons = make_moons(&config).context("failed to generate moons")?;
    let upper = moons.labels().iter().filter(|&&label| label == 0).count();
    info!(
        points = moons.len(),
        upper,
        lower = moons.len() - upper,
        seed = config.seed,
        "generated moons"
    );

    cli.render
        .render(DEMO, "Two moons", &moons.lift_to_3d(0.0))
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "moons demo failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
