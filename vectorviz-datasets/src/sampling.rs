//! Seeded random streams and small numeric helpers

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use vectorviz_core::{Dataset, Error, Result};

/// Mixed into the seed so the noise stream is independent of the geometry stream
const NOISE_STREAM: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Random sources for one generator call
///
/// Geometry and noise use separate streams, so switching noise on or off
/// never changes the clean shape for a given seed.
pub struct Streams {
    pub geometry: SmallRng,
    pub noise: SmallRng,
}

impl Streams {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            geometry: SmallRng::seed_from_u64(seed),
            noise: SmallRng::seed_from_u64(seed ^ NOISE_STREAM),
        }
    }
}

/// Draw from `[0, 1)`
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// `n` evenly spaced values over `[start, end]`, both ends included
///
/// One value yields `start`; zero values yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| if i + 1 == n && n > 1 { end } else { start + step * i as f64 })
}

/// Angular offset of arm `index` when `count` arms share the full circle
pub fn arm_angle(index: usize, count: usize) -> f64 {
    std::f64::consts::TAU * index as f64 / count as f64
}

/// Rescale `values` to `[0, 1]` by min-max normalization
///
/// A constant (or empty) input maps to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    if range.is_nan() || range <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}

/// Class counts must be positive
pub fn ensure_class_count(n_classes: usize) -> Result<()> {
    if n_classes == 0 {
        return Err(Error::invalid_parameter(
            "n_classes",
            "must be a positive integer, got 0",
        ));
    }
    Ok(())
}

/// Number of points in `groups` groups of `per_group` points each
pub fn total_points(name: &'static str, groups: usize, per_group: usize) -> Result<usize> {
    groups.checked_mul(per_group).ok_or_else(|| {
        Error::invalid_parameter(name, format!("{groups} x {per_group} points overflows"))
    })
}

/// Empty vector with room for `count` items
///
/// Fails with `InvalidParameter` on `name` when the allocation is impossible.
pub fn buffer<T>(name: &'static str, count: usize) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(|e| Error::invalid_parameter(name, format!("cannot hold {count} points: {e}")))?;
    Ok(items)
}

/// Empty dataset with room for `count` points
pub fn dataset_buffer<P, L>(name: &'static str, count: usize) -> Result<Dataset<P, L>> {
    Dataset::from_parts(buffer(name, count)?, buffer(name, count)?)
}
