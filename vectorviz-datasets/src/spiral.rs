//! Multi-arm Archimedean spirals

use crate::noise::Noise;
use crate::sampling::{arm_angle, dataset_buffer, ensure_class_count, total_points, unit, Streams};
use crate::DatasetGenerator;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use vectorviz_core::{ensure_greater_than, ensure_non_negative, LabeledPoints2, Point2d, Result};

/// Parameters for [`make_spiral`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Number of points on each arm
    pub n_samples_per_class: usize,
    /// Number of arms, one class per arm
    pub n_classes: usize,
    /// How many times each arm winds around the origin
    pub n_rotations: f64,
    /// Widens the distance between neighbouring turns
    pub gap_between_spiral: f64,
    /// Moves each arm's origin away from the center along its own direction
    pub gap_between_start_point: f64,
    /// Spread points evenly along the curve instead of clustering them near the origin
    pub equal_interval: bool,
    pub noise: Noise,
    pub seed: u64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            n_samples_per_class: 100,
            n_classes: 2,
            n_rotations: 3.0,
            gap_between_spiral: 0.0,
            gap_between_start_point: 0.0,
            equal_interval: true,
            noise: Noise::None,
            seed: 0,
        }
    }
}

impl SpiralConfig {
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
        ensure_non_negative("n_rotations", self.n_rotations)?;
        ensure_greater_than("gap_between_spiral", self.gap_between_spiral, -1.0)?;
        if !self.gap_between_start_point.is_finite() {
            return Err(vectorviz_core::Error::invalid_parameter(
                "gap_between_start_point",
                "must be finite",
            ));
        }
        self.noise.validate()
    }
}

/// Generate `n_classes` interleaved spiral arms
///
/// Arm `c` is rotated by `2π·c / n_classes`. Points are ordered arm by arm
/// and labelled with their arm index.
pub fn make_spiral(config: &SpiralConfig) -> Result<LabeledPoints2> {
    config.validate()?;

    let sampler = config.noise.sampler()?;
    let mut streams = Streams::from_seed(config.seed);
    let scale = 1.0 + config.gap_between_spiral;
    let t_max = config.n_rotations * PI * 2.0;

    let total = total_points("n_samples_per_class", config.n_classes, config.n_samples_per_class)?;
    let mut data: LabeledPoints2 = dataset_buffer("n_samples_per_class", total)?;
    for arm in 0..config.n_classes {
        let phase = arm_angle(arm, config.n_classes);
        let shift_x = config.gap_between_start_point * phase.cos();
        let shift_y = config.gap_between_start_point * phase.sin();

        for _ in 0..config.n_samples_per_class {
            let u = unit(&mut streams.geometry);
            let t = if config.equal_interval { t_max * u.sqrt() } else { t_max * u };

            let x = scale * t * (t + phase).cos() + shift_x;
            let y = scale * t * (t + phase).sin() + shift_y;
            let dx = sampler.sample(&mut streams.noise);
            let dy = sampler.sample(&mut streams.noise);
            data.push(Point2d::new(x + dx, y + dy), arm);
        }
    }

    tracing::debug!(
        generator = "spiral",
        n_classes = config.n_classes,
        n_samples_per_class = config.n_samples_per_class,
        seed = config.seed,
        "generated dataset"
    );
    Ok(data)
}

impl DatasetGenerator for SpiralConfig {
    type Point = Point2d;
    type Label = usize;

    const NAME: &'static str = "spiral";

    fn validate(&self) -> Result<()> {
        SpiralConfig::validate(self)
    }

    fn generate(&self) -> Result<LabeledPoints2> {
        make_spiral(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vectorviz_core::Error;

    #[test]
    fn test_labels_are_arm_ordered() {
        let spiral = make_spiral(&SpiralConfig::default().with_arms(3, 50)).unwrap();
        assert_eq!(spiral.len(), 150);

        let expected: Vec<usize> = (0..3).flat_map(|c| std::iter::repeat(c).take(50)).collect();
        assert_eq!(spiral.labels(), expected.as_slice());
    }

    #[test]
    fn test_zero_classes_rejected() {
        let result = make_spiral(&SpiralConfig::default().with_arms(0, 10));
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "n_classes", .. })
        ));
    }

    #[test]
    fn test_negative_class_count_rejected_at_load_time() {
        let parsed: std::result::Result<SpiralConfig, _> =
            serde_json::from_str(r#"{"n_classes": -1}"#);
        assert!(parsed.is_err());
        let fractional: std::result::Result<SpiralConfig, _> =
            serde_json::from_str(r#"{"n_classes": 1.5}"#);
        assert!(fractional.is_err());
    }

    #[test]
    fn test_points_lie_on_rotated_arms() {
        // Without noise each point satisfies r = scale * t with angle t + phase
        let config = SpiralConfig {
            n_rotations: 1.0,
            gap_between_spiral: 0.5,
            ..SpiralConfig::default().with_arms(4, 20).with_seed(3)
        };
        let spiral = make_spiral(&config).unwrap();

        for (point, &arm) in spiral.iter() {
            let r = (point.x * point.x + point.y * point.y).sqrt();
            let t = r / 1.5;
            let phase = arm_angle(arm, 4);
            assert_relative_eq!(point.x, r * (t + phase).cos(), epsilon = 1e-9);
            assert_relative_eq!(point.y, r * (t + phase).sin(), epsilon = 1e-9);
            assert!(t <= 2.0 * PI + 1e-9);
        }
    }

    #[test]
    fn test_start_point_gap_shifts_origin() {
        let config = SpiralConfig {
            n_rotations: 0.0,
            gap_between_start_point: 2.0,
            ..SpiralConfig::default().with_arms(2, 3)
        };
        let spiral = make_spiral(&config).unwrap();
        // With zero rotations every point sits on its arm's shifted origin
        assert_relative_eq!(spiral.points()[0].x, 2.0);
        assert_relative_eq!(spiral.points()[0].y, 0.0);
        assert_relative_eq!(spiral.points()[3].x, -2.0);
        assert_relative_eq!(spiral.points()[3].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_interval_pushes_points_outward() {
        let mean_radius = |equal_interval: bool| {
            let config = SpiralConfig {
                equal_interval,
                ..SpiralConfig::default().with_arms(1, 2000).with_seed(11)
            };
            let spiral = make_spiral(&config).unwrap();
            spiral.points().iter().map(|p| p.coords.norm()).sum::<f64>() / 2000.0
        };
        // E[sqrt(u)] = 2/3 versus E[u] = 1/2
        assert!(mean_radius(true) > mean_radius(false));
    }

    #[test]
    fn test_zero_noise_matches_no_noise() {
        let base = SpiralConfig::default().with_seed(21);
        let clean = make_spiral(&base).unwrap();
        let zero = make_spiral(&base.clone().with_noise(0.0)).unwrap();
        assert_eq!(clean, zero);
    }

    #[test]
    fn test_noise_keeps_geometry_stream() {
        let base = SpiralConfig::default().with_seed(8);
        let clean = make_spiral(&base).unwrap();
        let noisy = make_spiral(&base.clone().with_noise(0.05)).unwrap();
        assert_eq!(clean.labels(), noisy.labels());
        for (a, b) in clean.points().iter().zip(noisy.points()) {
            assert!((a - b).norm() < 1.0);
        }
    }
}
