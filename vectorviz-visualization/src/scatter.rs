//! 3D scatter trace and its presentation options

use crate::camera::Camera;
use crate::colorscale::ColorScale;
use serde::Serialize;
use vectorviz_core::{ensure_positive, ensure_same_len, Error, Point3d, Result};

/// Per-point marker coloring
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    /// Continuous values mapped through the color scale
    Scalar(Vec<f64>),
    /// Class labels, one color band per class
    Category(Vec<usize>),
    /// One CSS color for every point
    Fixed(String),
}

impl MarkerColor {
    /// Number of per-point values, `None` for a fixed color
    pub fn len(&self) -> Option<usize> {
        match self {
            MarkerColor::Scalar(values) => Some(values.len()),
            MarkerColor::Category(labels) => Some(labels.len()),
            MarkerColor::Fixed(_) => None,
        }
    }

    /// Check the color array against the number of points
    pub fn check_len(&self, n_points: usize) -> Result<()> {
        match self.len() {
            Some(len) => ensure_same_len("colors", n_points, len),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for MarkerColor {
    fn from(values: Vec<f64>) -> Self {
        MarkerColor::Scalar(values)
    }
}

impl From<&[f64]> for MarkerColor {
    fn from(values: &[f64]) -> Self {
        MarkerColor::Scalar(values.to_vec())
    }
}

impl From<Vec<usize>> for MarkerColor {
    fn from(labels: Vec<usize>) -> Self {
        MarkerColor::Category(labels)
    }
}

impl From<&[usize]> for MarkerColor {
    fn from(labels: &[usize]) -> Self {
        MarkerColor::Category(labels.to_vec())
    }
}

impl From<&str> for MarkerColor {
    fn from(color: &str) -> Self {
        MarkerColor::Fixed(color.to_string())
    }
}

/// Figure margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
    pub pad: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 50,
            r: 50,
            b: 100,
            t: 100,
            pad: 4,
        }
    }
}

/// Presentation options for a 3D scatter plot
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterOptions {
    pub width: u32,
    pub height: u32,
    pub marker_size: f64,
    pub colorscale: ColorScale,
    pub opacity: f64,
    /// Show the color bar next to the plot
    pub show_scale: bool,
    pub title: Option<String>,
    pub margin: Margin,
    pub camera: Camera,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            marker_size: 3.0,
            colorscale: ColorScale::Jet,
            opacity: 0.8,
            show_scale: false,
            title: None,
            margin: Margin::default(),
            camera: Camera::default(),
        }
    }
}

impl ScatterOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn with_colorscale(mut self, colorscale: ColorScale) -> Self {
        self.colorscale = colorscale;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid_parameter("width", "must be greater than zero"));
        }
        if self.height == 0 {
            return Err(Error::invalid_parameter("height", "must be greater than zero"));
        }
        ensure_positive("marker_size", self.marker_size)?;
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::invalid_parameter(
                "opacity",
                format!("must lie in [0, 1], got {}", self.opacity),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: f64,
    pub color: MarkerColor,
    pub colorscale: ColorScale,
    pub opacity: f64,
    pub showscale: bool,
    pub line: MarkerLine,
}

/// One `scatter3d` trace in markers mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter3d {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    pub marker: Marker,
}

/// Default hover label for point `index`
pub fn default_label(index: usize) -> String {
    format!("point #{index}")
}

impl Scatter3d {
    /// Build a trace, checking colors and text against the point count
    pub fn new(
        points: &[Point3d],
        colors: MarkerColor,
        text: Option<Vec<String>>,
        options: &ScatterOptions,
    ) -> Result<Self> {
        colors.check_len(points.len())?;
        let text = match text {
            Some(text) => {
                ensure_same_len("text", points.len(), text.len())?;
                text
            }
            None => (0..points.len()).map(default_label).collect(),
        };

        Ok(Self {
            trace_type: "scatter3d",
            mode: "markers",
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
            text,
            marker: Marker {
                size: options.marker_size,
                color: colors,
                colorscale: options.colorscale,
                opacity: options.opacity,
                showscale: options.show_scale,
                line: MarkerLine { width: 0.0 },
            },
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Vec<Point3d> {
        vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_default_text_labels() {
        let trace = Scatter3d::new(
            &cube(),
            MarkerColor::Scalar(vec![0.0, 0.5, 1.0]),
            None,
            &ScatterOptions::default(),
        )
        .unwrap();
        assert_eq!(trace.text, vec!["point #0", "point #1", "point #2"]);
        assert_eq!(trace.z, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_text_length_mismatch() {
        let result = Scatter3d::new(
            &cube(),
            vec![0usize, 1, 2].into(),
            Some(vec!["a".to_string()]),
            &ScatterOptions::default(),
        );
        assert!(matches!(
            result,
            Err(Error::LengthMismatch { what: "text", expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_color_length_mismatch() {
        let result = Scatter3d::new(&cube(), MarkerColor::Scalar(vec![0.0, 1.0]), None, &ScatterOptions::default());
        assert!(matches!(
            result,
            Err(Error::LengthMismatch { what: "colors", expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_fixed_color_skips_length_check() {
        let trace = Scatter3d::new(&cube(), "red".into(), None, &ScatterOptions::default()).unwrap();
        assert_eq!(trace.marker.color, MarkerColor::Fixed("red".to_string()));
    }

    #[test]
    fn test_options_validation() {
        assert!(ScatterOptions::default().validate().is_ok());
        assert!(ScatterOptions::default().with_size(0, 10).validate().is_err());
        assert!(ScatterOptions::default().with_marker_size(0.0).validate().is_err());
        let opacity = ScatterOptions {
            opacity: 1.5,
            ..ScatterOptions::default()
        };
        assert!(matches!(
            opacity.validate(),
            Err(Error::InvalidParameter { name: "opacity", .. })
        ));
    }

    #[test]
    fn test_trace_json_shape() {
        let trace = Scatter3d::new(&cube(), vec![2usize, 0, 1].into(), None, &ScatterOptions::default()).unwrap();
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scatter3d");
        assert_eq!(json["mode"], "markers");
        assert_eq!(json["marker"]["colorscale"], "Jet");
        assert_eq!(json["marker"]["color"], serde_json::json!([2, 0, 1]));
        assert_eq!(json["marker"]["line"]["width"], 0.0);
        assert_eq!(json["marker"]["opacity"], 0.8);
    }
}
