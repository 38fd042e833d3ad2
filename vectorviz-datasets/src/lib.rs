//! # vectorviz datasets
//!
//! Synthetic point-cloud generators for visualization and algorithm testing.
//!
//! Every generator is a pure function of its configuration: the same config
//! (including its `seed`) always yields the same points. Configurations are
//! validated before any sampling and invalid values are reported as
//! [`vectorviz_core::Error::InvalidParameter`].
//!
//! - [`make_moons`]: two interleaving half circles
//! - [`make_spiral`]: multi-arm Archimedean spirals
//! - [`make_swiss_roll`]: a 3D swiss roll with a depth gradient
//! - [`make_radial`] / [`make_two_layer_radial`]: star-burst sectors, optionally with an outer ring

pub mod moons;
pub mod noise;
pub mod radial;
pub mod sampling;
pub mod spiral;
pub mod swiss_roll;

// Re-export commonly used items
pub use moons::*;
pub use noise::*;
pub use radial::*;
pub use spiral::*;
pub use swiss_roll::*;

use vectorviz_core::{Dataset, Result};

/// A generator configuration that can produce a dataset
pub trait DatasetGenerator {
    type Point;
    type Label;

    /// Short name used in logs and file names
    const NAME: &'static str;

    /// Check every parameter without generating anything
    fn validate(&self) -> Result<()>;

    /// Validate and generate the dataset
    fn generate(&self) -> Result<Dataset<Self::Point, Self::Label>>;
}
