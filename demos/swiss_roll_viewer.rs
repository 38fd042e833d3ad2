//! Swiss roll colored by its position along the roll.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use vectorviz_core::Bounded;
use vectorviz_datasets::{make_swiss_roll, SwissRollConfig};
use vectorviz_demos::{load_config, logging, RenderArgs};

/// Binary name, also the stem of the default output file
const DEMO: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(about = "Generate a swiss roll and open it as an interactive scatter plot")]
struct Cli {
    /// JSON file with a swiss roll config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    samples: Option<usize>,

    #[arg(long)]
    rotations: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    gap: Option<f64>,

    /// Standard deviation of the jitter on every axis
    #[arg(long)]
    thickness: Option<f64>,

    /// Extent along y
    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    render: RenderArgs,
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let mut config: SwissRollConfig = load_config(cli.config.as_deref())?;
    if let Some(n) = cli.samples {
        config.n_samples = n;
    }
    if let Some(n) = cli.rotations {
        config.n_rotations = n;
    }
    if let Some(gap) = cli.gap {
        config.gap = gap;
    }
    if let Some(thickness) = cli.thickness {
        config.thickness = thickness;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let roll = make_swiss_roll(&config).context("failed to generate swiss roll")?;
    let (min, max) = roll.bounding_box();
    info!(
        points = roll.len(),
        min = ?min.coords.as_slice(),
        max = ?max.coords.as_slice(),
        seed = config.seed,
        "generated swiss roll"
    );

    cli.render.render(DEMO, "Swiss roll", &roll)
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "swiss roll viewer failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
