//! Figure scene description: traces plus layout
//!
//! A [`Figure`] serializes to the JSON figure schema consumed by plotly.js,
//! and can be wrapped into a standalone HTML page.

use crate::camera::Camera;
use crate::scatter::{Margin, MarkerColor, Scatter3d, ScatterOptions};
use ndarray::ArrayView2;
use serde::Serialize;
use vectorviz_core::{Dataset, Error, Point3d, Result};

/// plotly.js build loaded by the HTML output
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    fn named(name: &str) -> Self {
        Self {
            title: Title {
                text: name.to_string(),
            },
        }
    }
}

/// Portion of the figure the scene occupies, as `[start, end]` fractions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            x: [0.0, 1.0],
            y: [0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub domain: Domain,
    pub camera: Camera,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub autosize: bool,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub scene: Scene,
}

impl Layout {
    pub fn from_options(options: &ScatterOptions) -> Self {
        Self {
            autosize: false,
            width: options.width,
            height: options.height,
            margin: options.margin,
            title: options.title.clone().map(|text| Title { text }),
            scene: Scene {
                xaxis: Axis::named("x"),
                yaxis: Axis::named("y"),
                zaxis: Axis::named("z"),
                domain: Domain::default(),
                camera: options.camera.clone(),
            },
        }
    }
}

/// A complete scene: one or more traces and the layout around them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Scatter3d>,
    pub layout: Layout,
}

impl Figure {
    /// Build a single-trace 3D scatter figure
    ///
    /// Fails before building anything if the options are invalid or if
    /// `colors` or `text` do not have one entry per point.
    pub fn scatter_3d(
        points: &[Point3d],
        colors: MarkerColor,
        text: Option<Vec<String>>,
        options: &ScatterOptions,
    ) -> Result<Self> {
        options.validate()?;
        let trace = Scatter3d::new(points, colors, text, options)?;
        Ok(Self {
            data: vec![trace],
            layout: Layout::from_options(options),
        })
    }

    /// Build a figure from an `[N, 3]` coordinate array
    pub fn scatter_3d_array(
        points: ArrayView2<'_, f64>,
        colors: MarkerColor,
        text: Option<Vec<String>>,
        options: &ScatterOptions,
    ) -> Result<Self> {
        let points = points_from_array(points)?;
        Self::scatter_3d(&points, colors, text, options)
    }

    /// Build a figure from a 3D dataset, coloring by its labels
    pub fn from_dataset<L>(dataset: &Dataset<Point3d, L>, options: &ScatterOptions) -> Result<Self>
    where
        L: Clone,
        MarkerColor: From<Vec<L>>,
    {
        let colors = MarkerColor::from(dataset.labels().to_vec());
        Self::scatter_3d(dataset.points(), colors, None, options)
    }

    /// Total number of points across all traces
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Scatter3d::len).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Standalone HTML page that draws the figure with plotly.js
    pub fn to_html(&self) -> Result<String> {
        // "</" would close the script element early
        let json = self.to_json()?.replace("</", "<\\/");
        let title = self
            .layout
            .title
            .as_ref()
            .map(|t| escape_html(&t.text))
            .unwrap_or_else(|| "vectorviz".to_string());

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="vectorviz-plot" style="width:{width}px;height:{height}px;"></div>
<script>
const figure = {json};
Plotly.newPlot("vectorviz-plot", figure.data, figure.layout);
</script>
</body>
</html>
"#,
            cdn = PLOTLY_CDN,
            width = self.layout.width,
            height = self.layout.height,
        ))
    }
}

/// Convert an `[N, 3]` array into points
pub fn points_from_array(points: ArrayView2<'_, f64>) -> Result<Vec<Point3d>> {
    if points.ncols() != 3 {
        return Err(Error::InvalidShape {
            expected_columns: 3,
            actual_columns: points.ncols(),
        });
    }
    Ok(points
        .rows()
        .into_iter()
        .map(|row| Point3d::new(row[0], row[1], row[2]))
        .collect())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorscale::ColorScale;
    use ndarray::array;

    fn line() -> Vec<Point3d> {
        (0..4).map(|i| Point3d::new(i as f64, 0.0, -(i as f64))).collect()
    }

    #[test]
    fn test_layout_json() {
        let options = ScatterOptions::default()
            .with_size(800, 500)
            .with_title("Swiss roll");
        let figure = Figure::scatter_3d(&line(), vec![0usize; 4].into(), None, &options).unwrap();
        let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();

        let layout = &json["layout"];
        assert_eq!(layout["autosize"], false);
        assert_eq!(layout["width"], 800);
        assert_eq!(layout["height"], 500);
        assert_eq!(layout["margin"]["b"], 100);
        assert_eq!(layout["margin"]["pad"], 4);
        assert_eq!(layout["title"]["text"], "Swiss roll");
        assert_eq!(layout["scene"]["domain"]["x"], serde_json::json!([0.0, 1.0]));
        assert_eq!(layout["scene"]["zaxis"]["title"]["text"], "z");
        assert_eq!(json["data"][0]["text"][3], "point #3");
    }

    #[test]
    fn test_title_omitted_when_absent() {
        let figure =
            Figure::scatter_3d(&line(), "blue".into(), None, &ScatterOptions::default()).unwrap();
        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["layout"].get("title").is_none());
    }

    #[test]
    fn test_array_must_have_three_columns() {
        let flat = array![[0.0, 1.0], [2.0, 3.0]];
        let result = Figure::scatter_3d_array(
            flat.view(),
            vec![0usize, 1].into(),
            None,
            &ScatterOptions::default(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidShape { expected_columns: 3, actual_columns: 2 })
        ));
    }

    #[test]
    fn test_array_rows_become_points() {
        let cloud = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
        let figure = Figure::scatter_3d_array(
            cloud.view(),
            MarkerColor::Scalar(vec![0.0, 1.0]),
            Some(vec!["a".into(), "b".into()]),
            &ScatterOptions::default().with_colorscale(ColorScale::Viridis),
        )
        .unwrap();
        assert_eq!(figure.data[0].y, vec![1.0, 4.0]);
        assert_eq!(figure.data[0].text, vec!["a", "b"]);
        assert_eq!(figure.point_count(), 2);
    }

    #[test]
    fn test_invalid_options_fail_first() {
        let options = ScatterOptions::default().with_marker_size(-1.0);
        let result = Figure::scatter_3d(&line(), vec![0usize; 4].into(), None, &options);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "marker_size", .. })
        ));
    }

    #[test]
    fn test_html_embeds_figure() {
        let figure = Figure::scatter_3d(
            &line(),
            vec![0usize; 4].into(),
            Some(vec!["</script>".to_string(); 4]),
            &ScatterOptions::default().with_title("a < b"),
        )
        .unwrap();
        let html = figure.to_html().unwrap();
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("<title>a &lt; b</title>"));
        assert!(html.contains("<\\/script>"));
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("width:600px;height:600px;"));
    }

    #[test]
    fn test_from_dataset_uses_labels() {
        let data = Dataset::from_parts(line(), vec![0.0, 0.25, 0.5, 1.0]).unwrap();
        let figure = Figure::from_dataset(&data, &ScatterOptions::default()).unwrap();
        assert_eq!(
            figure.data[0].marker.color,
            MarkerColor::Scalar(vec![0.0, 0.25, 0.5, 1.0])
        );
    }
}
