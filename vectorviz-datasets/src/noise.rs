//! Additive noise model shared by all generators

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use vectorviz_core::{ensure_non_negative, Error, Result};

/// Additive noise applied to generated coordinates
///
/// In configuration files the noise is written as a plain number (the
/// standard deviation) or `null` for no noise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Noise {
    /// Leave coordinates untouched
    #[default]
    None,
    /// Zero-mean Gaussian noise with the given standard deviation
    Gaussian { std: f64 },
}

impl Noise {
    /// Gaussian noise with standard deviation `std`
    pub fn gaussian(std: f64) -> Self {
        Noise::Gaussian { std }
    }

    /// Check that the standard deviation is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        match self {
            Noise::None => Ok(()),
            Noise::Gaussian { std } => ensure_non_negative("noise", *std),
        }
    }

    /// Whether this noise perturbs anything at all
    ///
    /// A zero standard deviation is inactive and draws no random numbers.
    pub fn is_active(&self) -> bool {
        matches!(self, Noise::Gaussian { std } if *std > 0.0)
    }

    /// Standard deviation, zero when inactive
    pub fn std(&self) -> f64 {
        match self {
            Noise::None => 0.0,
            Noise::Gaussian { std } => *std,
        }
    }

    /// Build a sampler for this noise
    pub fn sampler(&self) -> Result<NoiseSampler> {
        self.validate()?;
        let normal = if self.is_active() {
            let normal = Normal::new(0.0, self.std())
                .map_err(|e| Error::invalid_parameter("noise", e.to_string()))?;
            Some(normal)
        } else {
            None
        };
        Ok(NoiseSampler { normal })
    }
}

impl From<Option<f64>> for Noise {
    fn from(std: Option<f64>) -> Self {
        match std {
            Some(std) => Noise::Gaussian { std },
            None => Noise::None,
        }
    }
}

impl From<f64> for Noise {
    fn from(std: f64) -> Self {
        Noise::Gaussian { std }
    }
}

impl From<Noise> for Option<f64> {
    fn from(noise: Noise) -> Self {
        match noise {
            Noise::None => None,
            Noise::Gaussian { std } => Some(std),
        }
    }
}

/// Draws offsets for an already validated [`Noise`]
#[derive(Debug, Clone, Copy)]
pub struct NoiseSampler {
    normal: Option<Normal<f64>>,
}

impl NoiseSampler {
    /// Draw one offset, or `0.0` without touching `rng` when inactive
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.normal {
            Some(normal) => normal.sample(rng),
            None => 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.normal.is_some()
    }
}
