//! # vectorviz
//!
//! Synthetic point-cloud datasets and interactive 3D scatter plots for Rust.
//!
//! This is the umbrella crate that provides convenient access to all vectorviz functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Point types, labeled datasets and validation errors
//! - **Datasets**: Seeded generators for moons, spirals, swiss rolls and radial stars
//! - **Visualization**: Plotly-compatible 3D scatter figures and render backends
//!
//! ## Quick Start
//!
//! ```rust
//! use vectorviz::prelude::*;
//!
//! fn main() -> vectorviz::Result<()> {
//!     let roll = make_swiss_roll(&SwissRollConfig::default().with_seed(42))?;
//!
//!     let mut backend = MemoryBackend::new();
//!     show_dataset(&roll, &ScatterOptions::default(), &mut backend)?;
//!     assert_eq!(backend.figures[0].point_count(), 100);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables datasets and visualization
//! - `datasets`: Dataset generators
//! - `visualization`: Scatter rendering
//! - `all`: Enables all features

// Re-export core functionality
pub use vectorviz_core::*;

// Re-export sub-crates
#[cfg(feature = "datasets")]
pub use vectorviz_datasets as datasets;

#[cfg(feature = "visualization")]
pub use vectorviz_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use vectorviz_core::*;

    #[cfg(feature = "datasets")]
    pub use vectorviz_datasets::*;

    #[cfg(feature = "visualization")]
    pub use vectorviz_visualization::*;
}
