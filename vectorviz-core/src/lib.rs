//! Core data structures and traits for vectorviz
//!
//! This crate provides the fundamental types shared by the dataset generators
//! and the renderer: 2D/3D points, the labeled [`Dataset`] container, the
//! [`Bounded`] trait and the common [`Error`] type.

pub mod dataset;
pub mod error;
pub mod point;
pub mod traits;

pub use dataset::*;
pub use error::*;
pub use point::*;
pub use traits::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3};
