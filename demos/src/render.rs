//! Output flags shared by the demos

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;
use vectorviz_core::{ensure_positive, Dataset, Point3d};
use vectorviz_visualization::{
    show_dataset, Camera, ColorScale, HtmlFileBackend, JsonBackend, MarkerColor, RenderBackend,
    ScatterOptions,
};

/// How and where a demo renders its dataset
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// HTML file to write, defaults to `<demo>.html` in the working directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the figure JSON to stdout instead of an HTML file
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Indent the `--json` output
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Plotly color scale name
    #[arg(long, default_value_t = ColorScale::Jet)]
    pub colorscale: ColorScale,

    /// Marker size in pixels
    #[arg(long, default_value_t = 3.0)]
    pub marker_size: f64,

    /// Figure width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Camera distance from the scene center, in normalized scene units
    #[arg(long)]
    pub camera_distance: Option<f64>,

    /// Turn the camera around the vertical axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub camera_azimuth: f64,

    /// Tilt the camera toward the vertical axis, in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub camera_elevation: f64,
}

impl RenderArgs {
    pub fn options(&self, title: &str) -> Result<ScatterOptions> {
        let mut options = ScatterOptions::default()
            .with_size(self.width, self.height)
            .with_marker_size(self.marker_size)
            .with_colorscale(self.colorscale)
            .with_title(title);
        options.camera = self.camera()?;
        Ok(options)
    }

    /// Default camera orbited by the azimuth and elevation flags, then moved to the requested distance
    pub fn camera(&self) -> Result<Camera> {
        let mut camera = Camera::default();
        if self.camera_azimuth != 0.0 || self.camera_elevation != 0.0 {
            camera.orbit(
                self.camera_azimuth.to_radians(),
                self.camera_elevation.to_radians(),
            );
        }
        if let Some(distance) = self.camera_distance {
            ensure_positive("camera_distance", distance)?;
            camera.zoom(distance / camera.distance());
        }
        Ok(camera)
    }

    pub fn output_path(&self, demo: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{demo}.html")))
    }

    /// Render `dataset` to stdout as JSON or to an HTML file
    pub fn render<L>(&self, demo: &str, title: &str, dataset: &Dataset<Point3d, L>) -> Result<()>
    where
        L: Clone,
        MarkerColor: From<Vec<L>>,
    {
        let options = self.options(title)?;
        if self.json {
            let stdout = io::stdout();
            let mut backend = JsonBackend::new(stdout.lock());
            if self.pretty {
                backend = backend.pretty();
            }
            render_with(&mut backend, dataset, &options)
        } else {
            let mut backend = HtmlFileBackend::new(self.output_path(demo));
            render_with(&mut backend, dataset, &options)
        }
    }
}

fn render_with<L>(
    backend: &mut dyn RenderBackend,
    dataset: &Dataset<Point3d, L>,
    options: &ScatterOptions,
) -> Result<()>
where
    L: Clone,
    MarkerColor: From<Vec<L>>,
{
    show_dataset(dataset, options, backend)
        .with_context(|| format!("failed to render with the {} backend", backend.name()))
}

/// Load a generator config from a JSON file, or fall back to its defaults
///
/// Fields missing from the file keep their default values.
pub fn load_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config `{}`", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded generator config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use vectorviz_datasets::{MoonsConfig, SwissRollConfig};

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        render: RenderArgs,
    }

    #[test]
    fn test_render_args_defaults() {
        let args = Harness::parse_from(["demo"]).render;
        assert!(!args.json);
        assert_eq!(args.colorscale, ColorScale::Jet);
        assert_eq!(args.output_path("moons_demo"), PathBuf::from("moons_demo.html"));
        let options = args.options("Moons").unwrap();
        assert_eq!(options.marker_size, 3.0);
        assert_eq!(options.title.as_deref(), Some("Moons"));
        assert_eq!(options.camera, Camera::default());
    }

    #[test]
    fn test_camera_flags_place_the_eye() {
        let args = Harness::parse_from([
            "demo",
            "--camera-distance",
            "4",
            "--camera-azimuth",
            "-45",
        ])
        .render;
        let camera = args.camera().unwrap();
        assert!((camera.distance() - 4.0).abs() < 1e-9);
        // Default eye sits on the x = y diagonal; -45 degrees turns it onto the x axis
        assert!(camera.eye.y.abs() < 1e-9);
        assert!(camera.eye.x > 0.0);
    }

    #[test]
    fn test_camera_distance_must_be_positive() {
        let args = Harness::parse_from(["demo", "--camera-distance", "0"]).render;
        assert!(args.camera().is_err());
        assert!(args.options("Zero").is_err());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Harness::try_parse_from(["demo", "--pretty"]).is_err());
        assert!(Harness::parse_from(["demo", "--json", "--pretty"]).render.pretty);
    }

    #[test]
    fn test_colorscale_flag_parses_names() {
        let args = Harness::parse_from(["demo", "--colorscale", "viridis"]).render;
        assert_eq!(args.colorscale, ColorScale::Viridis);
        assert!(Harness::try_parse_from(["demo", "--colorscale", "sunset"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(Harness::try_parse_from(["demo", "--json", "--output", "a.html"]).is_err());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config: MoonsConfig = load_config(None).unwrap();
        assert_eq!(config, MoonsConfig::default());
    }

    #[test]
    fn test_load_config_merges_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roll.json");
        fs::write(&path, r#"{"n_samples": 250, "thickness": 0.1}"#).unwrap();

        let config: SwissRollConfig = load_config(Some(&path)).unwrap();
        assert_eq!(config.n_samples, 250);
        assert_eq!(config.thickness, 0.1);
        assert_eq!(config.width, SwissRollConfig::default().width);
    }

    #[test]
    fn test_load_config_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config::<MoonsConfig>(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_render_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let args = Harness::parse_from(["demo", "--output", path.to_str().unwrap()]).render;
        let data = Dataset::from_parts(vec![Point3d::origin(); 2], vec![0usize, 1]).unwrap();
        args.render("demo", "Two points", &data).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Two points"));
    }
}
