//! Swiss roll manifold with a depth gradient

use crate::noise::Noise;
use crate::sampling::{buffer, min_max_normalize, unit, Streams};
use crate::DatasetGenerator;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use vectorviz_core::{ensure_greater_than, ensure_non_negative, GradientPoints3, Point3d, Result};

/// Parameters for [`make_swiss_roll`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwissRollConfig {
    pub n_samples: usize,
    /// Number of turns of the roll
    pub n_rotations: f64,
    /// Gap between neighbouring roll planes
    pub gap: f64,
    /// Standard deviation of the jitter added to every axis
    pub thickness: f64,
    /// Extent of the roll along y
    pub width: f64,
    pub seed: u64,
}

impl Default for SwissRollConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            n_rotations: 1.5,
            gap: 0.0,
            thickness: 0.0,
            width: 10.0,
            seed: 0,
        }
    }
}

impl SwissRollConfig {
    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("n_rotations", self.n_rotations)?;
        ensure_greater_than("gap", self.gap, -1.0)?;
        ensure_non_negative("thickness", self.thickness)?;
        ensure_non_negative("width", self.width)
    }

    fn jitter(&self) -> Noise {
        Noise::gaussian(self.thickness)
    }
}

/// Generate a swiss roll with a color value per point
///
/// The spiral parameter `t` is uniform over `[π·r, 3π·r]` for `r`
/// rotations; each point's color is its `t` min-max normalized to `[0, 1]`.
pub fn make_swiss_roll(config: &SwissRollConfig) -> Result<GradientPoints3> {
    config.validate()?;

    let sampler = config.jitter().sampler()?;
    let mut streams = Streams::from_seed(config.seed);
    let scale = 1.0 + config.gap;

    let mut ts: Vec<f64> = buffer("n_samples", config.n_samples)?;
    ts.extend(
        (0..config.n_samples)
            .map(|_| config.n_rotations * PI * (1.0 + 2.0 * unit(&mut streams.geometry))),
    );

    let mut points: Vec<Point3d> = buffer("n_samples", config.n_samples)?;
    points.extend(ts.iter().map(|&t| {
        let y = config.width * (unit(&mut streams.geometry) - 0.5);
        Point3d::new(
            scale * t * t.cos() + sampler.sample(&mut streams.noise),
            y + sampler.sample(&mut streams.noise),
            scale * t * t.sin() + sampler.sample(&mut streams.noise),
        )
    }));

    let colors = min_max_normalize(&ts);

    tracing::debug!(
        generator = "swiss_roll",
        n_samples = config.n_samples,
        seed = config.seed,
        "generated dataset"
    );
    GradientPoints3::from_parts(points, colors)
}

impl DatasetGenerator for SwissRollConfig {
    type Point = Point3d;
    type Label = f64;

    const NAME: &'static str = "swiss_roll";

    fn validate(&self) -> Result<()> {
        SwissRollConfig::validate(self)
    }

    fn generate(&self) -> Result<GradientPoints3> {
        make_swiss_roll(self)
    }
}
