//! One-call scatter rendering
//!
//! Each call validates its input, builds a [`Figure`] and hands it to the
//! backend. Nothing is rendered when validation fails.

use crate::figure::Figure;
use crate::renderer::RenderBackend;
use crate::scatter::{MarkerColor, ScatterOptions};
use ndarray::ArrayView2;
use vectorviz_core::{Dataset, Point3d, Result};

/// Render a 3D scatter plot of `points`
///
/// # Arguments
/// * `points` - Point coordinates
/// * `colors` - One value per point, or a fixed color
/// * `text` - Hover labels; defaults to `point #i`
/// * `options` - Marker size, color scale and figure dimensions
/// * `backend` - Where the figure goes
///
/// # Example
/// ```rust
/// use vectorviz_core::Point3d;
/// use vectorviz_visualization::{scatter_3d, MemoryBackend, ScatterOptions};
///
/// fn main() -> vectorviz_core::Result<()> {
///     let points = vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 1.0, 1.0)];
///     let mut backend = MemoryBackend::new();
///     scatter_3d(&points, vec![0.0_f64, 1.0], None, &ScatterOptions::default(), &mut backend)?;
///     assert_eq!(backend.figures.len(), 1);
///     Ok(())
/// }
/// ```
pub fn scatter_3d(
    points: &[Point3d],
    colors: impl Into<MarkerColor>,
    text: Option<Vec<String>>,
    options: &ScatterOptions,
    backend: &mut dyn RenderBackend,
) -> Result<()> {
    let figure = Figure::scatter_3d(points, colors.into(), text, options)?;
    render(&figure, backend)
}

/// Render a 3D scatter plot of an `[N, 3]` coordinate array
pub fn scatter_3d_array(
    points: ArrayView2<'_, f64>,
    colors: impl Into<MarkerColor>,
    text: Option<Vec<String>>,
    options: &ScatterOptions,
    backend: &mut dyn RenderBackend,
) -> Result<()> {
    let figure = Figure::scatter_3d_array(points, colors.into(), text, options)?;
    render(&figure, backend)
}

/// Render a 3D dataset colored by its labels
pub fn show_dataset<L>(
    dataset: &Dataset<Point3d, L>,
    options: &ScatterOptions,
    backend: &mut dyn RenderBackend,
) -> Result<()>
where
    L: Clone,
    MarkerColor: From<Vec<L>>,
{
    let figure = Figure::from_dataset(dataset, options)?;
    render(&figure, backend)
}

fn render(figure: &Figure, backend: &mut dyn RenderBackend) -> Result<()> {
    tracing::debug!(
        backend = backend.name(),
        points = figure.point_count(),
        "rendering scatter plot"
    );
    backend.render(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MemoryBackend;
    use ndarray::Array2;
    use vectorviz_core::Error;

    #[test]
    fn test_mismatched_text_renders_nothing() {
        let points = vec![Point3d::origin(); 3];
        let mut backend = MemoryBackend::new();
        let result = scatter_3d(
            &points,
            vec![0usize, 1, 2],
            Some(vec!["only one".to_string()]),
            &ScatterOptions::default(),
            &mut backend,
        );
        assert!(matches!(result, Err(Error::LengthMismatch { what: "text", .. })));
        assert!(backend.figures.is_empty());
    }

    #[test]
    fn test_array_shape_checked() {
        let wide = Array2::<f64>::zeros((5, 4));
        let mut backend = MemoryBackend::new();
        let result = scatter_3d_array(
            wide.view(),
            vec![0usize; 5],
            None,
            &ScatterOptions::default(),
            &mut backend,
        );
        assert!(matches!(result, Err(Error::InvalidShape { actual_columns: 4, .. })));
        assert!(backend.figures.is_empty());
    }

    #[test]
    fn test_show_dataset_renders_once() {
        let data = Dataset::from_parts(vec![Point3d::origin(); 2], vec![0usize, 1]).unwrap();
        let mut backend = MemoryBackend::new();
        show_dataset(&data, &ScatterOptions::default(), &mut backend).unwrap();
        assert_eq!(backend.figures.len(), 1);
        assert_eq!(
            backend.figures[0].data[0].marker.color,
            MarkerColor::Category(vec![0, 1])
        );
    }
}
