//! Radial star-burst, optionally surrounded by a second ring of sectors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use vectorviz_datasets::{make_radial, make_two_layer_radial, RadialConfig, TwoLayerRadialConfig};
use vectorviz_demos::{load_config, logging, RenderArgs};

/// Binary name, also the stem of the default output file
const DEMO: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, Parser)]
#[command(about = "Generate a radial star-burst and render it")]
struct Cli {
    /// JSON file with a radial config; with `--two-layer` it is a two-layer config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Points in each sector
    #[arg(long)]
    samples: Option<usize>,

    /// Number of sectors
    #[arg(long)]
    classes: Option<usize>,

    #[arg(long)]
    radius: Option<f64>,

    /// Fraction of each class's share of the circle that its sector covers
    #[arg(long)]
    sector_width: Option<f64>,

    /// Add an outer ring of sectors
    #[arg(long)]
    two_layer: bool,

    #[arg(long, requires = "two_layer")]
    ring_gap: Option<f64>,

    #[arg(long, requires = "two_layer")]
    ring_width: Option<f64>,

    /// Standard deviation of the Gaussian noise
    #[arg(long)]
    noise: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    render: RenderArgs,
}

impl Cli {
    fn apply(&self, config: &mut RadialConfig) {
        if let Some(n) = self.samples {
            config.n_samples_per_class = n;
        }
        if let Some(n) = self.classes {
            config.n_classes = n;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(width) = self.sector_width {
            config.sector_width = width;
        }
        if self.noise.is_some() {
            config.noise = self.noise.into();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let data = if cli.two_layer {
        let mut config: TwoLayerRadialConfig = load_config(cli.config.as_deref())?;
        cli.apply(&mut config.inner);
        if let Some(gap) = cli.ring_gap {
            config.ring_gap = gap;
        }
        if let Some(width) = cli.ring_width {
            config.ring_width = width;
        }
        let (ring_inner, ring_outer) = config.ring_bounds();
        let data = make_two_layer_radial(&config).context("failed to generate two-layer radial")?;
        info!(
            points = data.len(),
            sectors = config.inner.n_classes,
            ring_inner,
            ring_outer,
            seed = config.inner.seed,
            "generated two-layer radial"
        );
        data
    } else {
        let mut config: RadialConfig = load_config(cli.config.as_deref())?;
        cli.apply(&mut config);
        let data = make_radial(&config).context("failed to generate radial")?;
        info!(
            points = data.len(),
            sectors = config.n_classes,
            seed = config.seed,
            "generated radial"
        );
        data
    };

    cli.render
        .render(DEMO, "Radial", &data.lift_to_3d(0.0))
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "radial demo failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
