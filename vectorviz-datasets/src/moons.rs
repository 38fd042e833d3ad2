//! Two interleaving half circles

use crate::noise::Noise;
use crate::sampling::{dataset_buffer, linspace, Streams};
use crate::DatasetGenerator;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use vectorviz_core::{ensure_at_least, ensure_positive, LabeledPoints2, Point2d, Result};

/// Smallest accepted horizontal or vertical gap between the moons
pub const MIN_MOON_GAP: f64 = -0.3;

/// Parameters for [`make_moons`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonsConfig {
    /// Total number of points across both moons
    pub n_samples: usize,
    /// Ratio of the y range over the x range, must be positive
    pub xy_ratio: f64,
    /// Horizontal gap between the moon centers, at least -0.3
    pub x_gap: f64,
    /// Vertical gap between the moon centers, at least -0.3
    pub y_gap: f64,
    /// Noise added to x, and to y scaled by `xy_ratio`
    pub noise: Noise,
    pub seed: u64,
}

impl Default for MoonsConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            xy_ratio: 1.0,
            x_gap: 0.0,
            y_gap: 0.0,
            noise: Noise::None,
            seed: 0,
        }
    }
}

impl MoonsConfig {
    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_gaps(mut self, x_gap: f64, y_gap: f64) -> Self {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
        self
    }

    pub fn with_noise(mut self, noise: impl Into<Noise>) -> Self {
        self.noise = noise.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("xy_ratio", self.xy_ratio)?;
        ensure_at_least("x_gap", self.x_gap, MIN_MOON_GAP)?;
        ensure_at_least("y_gap", self.y_gap, MIN_MOON_GAP)?;
        self.noise.validate()
    }
}

/// Generate two interleaving moons
///
/// The first `n_samples / 2` points trace the outer arc (label 0) and the
/// rest trace the inner arc (label 1). Arc angles are evenly spaced over
/// `[0, π]`.
///
/// # Example
/// ```rust
/// use vectorviz_datasets::{make_moons, MoonsConfig};
///
/// fn main() -> vectorviz_core::Result<()> {
///     let moons = make_moons(&MoonsConfig::default().with_samples(10))?;
///     assert_eq!(moons.len(), 10);
///     assert_eq!(moons.labels().iter().filter(|&&l| l == 0).count(), 5);
///     Ok(())
/// }
/// ```
pub fn make_moons(config: &MoonsConfig) -> Result<LabeledPoints2> {
    config.validate()?;

    let n_outer = config.n_samples / 2;
    let n_inner = config.n_samples - n_outer;
    let ratio = config.xy_ratio;

    let mut data: LabeledPoints2 = dataset_buffer("n_samples", config.n_samples)?;
    for theta in linspace(0.0, PI, n_outer) {
        let x = theta.cos() - config.x_gap;
        let y = ratio * theta.sin() + config.y_gap;
        data.push(Point2d::new(x, y), 0);
    }
    for theta in linspace(0.0, PI, n_inner) {
        let x = 1.0 - theta.cos() + config.x_gap;
        let y = ratio * (1.0 - theta.sin() - (0.5 + config.y_gap));
        data.push(Point2d::new(x, y), 1);
    }

    let sampler = config.noise.sampler()?;
    if sampler.is_active() {
        let mut streams = Streams::from_seed(config.seed);
        let (points, labels) = data.into_parts();
        let noisy = points
            .into_iter()
            .map(|p| {
                let dx = sampler.sample(&mut streams.noise);
                let dy = sampler.sample(&mut streams.noise) * ratio;
                Point2d::new(p.x + dx, p.y + dy)
            })
            .collect();
        data = LabeledPoints2::from_parts(noisy, labels)?;
    }

    tracing::debug!(
        generator = "moons",
        n_outer,
        n_inner,
        seed = config.seed,
        noisy = sampler.is_active(),
        "generated dataset"
    );
    Ok(data)
}

impl DatasetGenerator for MoonsConfig {
    type Point = Point2d;
    type Label = usize;

    const NAME: &'static str = "moons";

    fn validate(&self) -> Result<()> {
        MoonsConfig::validate(self)
    }

    fn generate(&self) -> Result<LabeledPoints2> {
        make_moons(self)
    }
}
