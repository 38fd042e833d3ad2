//! Star-burst sectors and the two-layer ring variant

use crate::noise::{Noise, NoiseSampler};
use crate::sampling::{arm_angle, dataset_buffer, ensure_class_count, total_points, unit, Streams};
use crate::DatasetGenerator;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use vectorviz_core::{
    ensure_non_negative, ensure_positive, Error, LabeledPoints2, Point2d, Result,
};

/// Parameters for [`make_radial`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    pub n_samples_per_class: usize,
    /// Number of sectors, one class per sector
    pub n_classes: usize,
    /// Outer radius of the star
    pub radius: f64,
    /// Fraction of each class's share of the circle that its sector covers, in `(0, 1]`
    pub sector_width: f64,
    /// Spread points uniformly over the sector area instead of along the radius
    pub equal_interval: bool,
    pub noise: Noise,
    pub seed: u64,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            n_samples_per_class: 100,
            n_classes: 4,
            radius: 1.0,
            sector_width: 0.5,
            equal_interval: true,
            noise: Noise::None,
            seed: 0,
        }
    }
}

impl RadialConfig {
    pub fn with_arms(mut self, n_classes: usize, n_samples_per_class: usize) -> Self {
        self.n_classes = n_classes;
        self.n_samples_per_class = n_samples_per_class;
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
        ensure_class_count(self.n_classes)?;
        ensure_positive("radius", self.radius)?;
        ensure_sector_width(self.sector_width)?;
        self.noise.validate()
    }

    /// Angle covered by one class's sector
    fn span(&self) -> f64 {
        self.sector_width * TAU / self.n_classes as f64
    }
}

fn ensure_sector_width(width: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 && width <= 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "sector_width",
            format!("must lie in (0, 1], got {width}"),
        ))
    }
}

/// An annular sector band shared by both radial layers
struct Band {
    inner: f64,
    outer: f64,
    rotation: f64,
}

/// Append one band's worth of sectors, arm by arm
fn push_band(
    data: &mut LabeledPoints2,
    config: &RadialConfig,
    band: &Band,
    sampler: &NoiseSampler,
    streams: &mut Streams,
) {
    let span = config.span();
    let width = band.outer - band.inner;

    for class in 0..config.n_classes {
        let center = arm_angle(class, config.n_classes) + band.rotation;
        for _ in 0..config.n_samples_per_class {
            let angle = center + (unit(&mut streams.geometry) - 0.5) * span;
            let v = unit(&mut streams.geometry);
            let r = if config.equal_interval {
                // Area-uniform over the annulus
                let inner_sq = band.inner * band.inner;
                let outer_sq = band.outer * band.outer;
                (inner_sq + v * (outer_sq - inner_sq)).sqrt()
            } else {
                band.inner + v * width
            };

            let dx = sampler.sample(&mut streams.noise);
            let dy = sampler.sample(&mut streams.noise);
            data.push(Point2d::new(r * angle.cos() + dx, r * angle.sin() + dy), class);
        }
    }
}

/// Generate a star-burst of `n_classes` sectors around the origin
///
/// Sector `c` is centred on `2π·c / n_classes` and holds label `c`. Points
/// are ordered sector by sector.
pub fn make_radial(config: &RadialConfig) -> Result<LabeledPoints2> {
    config.validate()?;

    let sampler = config.noise.sampler()?;
    let mut streams = Streams::from_seed(config.seed);
    let total = total_points("n_samples_per_class", config.n_classes, config.n_samples_per_class)?;
    let mut data: LabeledPoints2 = dataset_buffer("n_samples_per_class", total)?;

    let star = Band {
        inner: 0.0,
        outer: config.radius,
        rotation: 0.0,
    };
    push_band(&mut data, config, &star, &sampler, &mut streams);

    tracing::debug!(
        generator = "radial",
        n_classes = config.n_classes,
        n_samples_per_class = config.n_samples_per_class,
        seed = config.seed,
        "generated dataset"
    );
    Ok(data)
}

/// Parameters for [`make_two_layer_radial`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoLayerRadialConfig {
    /// The inner star; its sample count, classes, noise and seed apply to the ring too
    pub inner: RadialConfig,
    /// Distance between the star's radius and the ring
    pub ring_gap: f64,
    /// Radial thickness of the ring
    pub ring_width: f64,
}

impl Default for TwoLayerRadialConfig {
    fn default() -> Self {
        Self {
            inner: RadialConfig::default(),
            ring_gap: 0.5,
            ring_width: 0.5,
        }
    }
}

impl TwoLayerRadialConfig {
    pub fn validate(&self) -> Result<()> {
        self.inner.validate()?;
        ensure_non_negative("ring_gap", self.ring_gap)?;
        ensure_positive("ring_width", self.ring_width)
    }

    /// Inner and outer radius of the ring
    pub fn ring_bounds(&self) -> (f64, f64) {
        let start = self.inner.radius + self.ring_gap;
        (start, start + self.ring_width)
    }
}

/// Generate the radial star plus an outer ring of sectors
///
/// The ring's sectors are rotated by half a sector (`π / n_classes`) so each
/// ring class sits between two star classes. All star points come first,
/// then the ring, each ordered sector by sector.
pub fn make_two_layer_radial(config: &TwoLayerRadialConfig) -> Result<LabeledPoints2> {
    config.validate()?;

    let radial = &config.inner;
    let sampler = radial.noise.sampler()?;
    let mut streams = Streams::from_seed(radial.seed);
    let per_layer =
        total_points("n_samples_per_class", radial.n_classes, radial.n_samples_per_class)?;
    let total = total_points("n_samples_per_class", 2, per_layer)?;
    let mut data: LabeledPoints2 = dataset_buffer("n_samples_per_class", total)?;

    let star = Band {
        inner: 0.0,
        outer: radial.radius,
        rotation: 0.0,
    };
    let (ring_inner, ring_outer) = config.ring_bounds();
    let ring = Band {
        inner: ring_inner,
        outer: ring_outer,
        rotation: TAU / (2.0 * radial.n_classes as f64),
    };
    push_band(&mut data, radial, &star, &sampler, &mut streams);
    push_band(&mut data, radial, &ring, &sampler, &mut streams);

    tracing::debug!(
        generator = "two_layer_radial",
        n_classes = radial.n_classes,
        n_samples_per_class = radial.n_samples_per_class,
        ring_inner,
        ring_outer,
        seed = radial.seed,
        "generated dataset"
    );
    Ok(data)
}

impl DatasetGenerator for RadialConfig {
    type Point = Point2d;
    type Label = usize;

    const NAME: &'static str = "radial";

    fn validate(&self) -> Result<()> {
        RadialConfig::validate(self)
    }

    fn generate(&self) -> Result<LabeledPoints2> {
        make_radial(self)
    }
}

impl DatasetGenerator for TwoLayerRadialConfig {
    type Point = Point2d;
    type Label = usize;

    const NAME: &'static str = "two_layer_radial";

    fn validate(&self) -> Result<()> {
        TwoLayerRadialConfig::validate(self)
    }

    fn generate(&self) -> Result<LabeledPoints2> {
        make_two_layer_radial(self)
    }
}
