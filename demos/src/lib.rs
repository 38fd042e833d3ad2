//! Shared plumbing for the vectorviz demo binaries
//!
//! Every demo parses its own shape flags, then hands the generated dataset
//! to [`render::RenderArgs`] for output.

pub mod logging;
pub mod render;

pub use render::{load_config, RenderArgs};
