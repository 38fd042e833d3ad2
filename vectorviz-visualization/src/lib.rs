//! Visualization for vectorviz datasets
//!
//! This crate turns 3D point sets into interactive scatter plots:
//! - A typed scene description ([`Figure`]) that serializes to the plotly.js figure schema
//! - Named color scales
//! - Scene camera placement
//! - Rendering backends (standalone HTML, JSON stream, in-memory)

pub mod camera;
pub mod colorscale;
pub mod figure;
pub mod renderer;
pub mod scatter;
pub mod viewer;

pub use camera::*;
pub use colorscale::*;
pub use figure::*;
pub use renderer::*;
pub use scatter::*;
pub use viewer::*;
