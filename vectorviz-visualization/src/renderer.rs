//! Rendering backends
//!
//! A backend receives a finished [`Figure`] and presents it: as an HTML page
//! on disk, as JSON on a stream, or by keeping it in memory.

use crate::figure::Figure;
use std::io::Write;
use std::path::{Path, PathBuf};
use vectorviz_core::Result;

/// Trait for anything that can present a figure
pub trait RenderBackend {
    /// Present the figure
    fn render(&mut self, figure: &Figure) -> Result<()>;

    /// Get the backend name used in logs
    fn name(&self) -> &'static str;
}

/// Writes a standalone interactive HTML page
#[derive(Debug, Clone)]
pub struct HtmlFileBackend {
    path: PathBuf,
}

impl HtmlFileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderBackend for HtmlFileBackend {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        let html = figure.to_html()?;
        std::fs::write(&self.path, html)?;
        tracing::info!(
            path = %self.path.display(),
            points = figure.point_count(),
            "wrote interactive scatter plot"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

/// Writes the figure JSON to any writer
pub struct JsonBackend<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderBackend for JsonBackend<W> {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, figure)?;
        } else {
            serde_json::to_writer(&mut self.writer, figure)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        tracing::debug!(points = figure.point_count(), "wrote figure json");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// Keeps every rendered figure
#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub figures: Vec<Figure>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently rendered figure
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl RenderBackend for MemoryBackend {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        self.figures.push(figure.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::{MarkerColor, ScatterOptions};
    use vectorviz_core::Point3d;

    fn figure() -> Figure {
        Figure::scatter_3d(
            &[Point3d::new(0.0, 1.0, 2.0)],
            MarkerColor::Scalar(vec![0.5]),
            None,
            &ScatterOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_json_backend_writes_one_line() {
        let mut backend = JsonBackend::new(Vec::new());
        backend.render(&figure()).unwrap();
        let output = String::from_utf8(backend.into_inner()).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["data"][0]["x"][0], 0.0);
    }

    #[test]
    fn test_pretty_json_spans_lines() {
        let mut backend = JsonBackend::new(Vec::new()).pretty();
        backend.render(&figure()).unwrap();
        assert!(backend.into_inner().iter().filter(|&&b| b == b'\n').count() > 1);
    }

    #[test]
    fn test_memory_backend_keeps_figures() {
        let mut backend = MemoryBackend::new();
        backend.render(&figure()).unwrap();
        backend.render(&figure()).unwrap();
        assert_eq!(backend.figures.len(), 2);
        assert_eq!(backend.last().map(Figure::point_count), Some(1));
        assert_eq!(backend.name(), "memory");
    }

    #[test]
    fn test_html_backend_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.html");
        let mut backend = HtmlFileBackend::new(&path);
        backend.render(&figure()).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("\"scatter3d\""));
    }

    #[test]
    fn test_html_backend_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = HtmlFileBackend::new(dir.path().join("missing").join("plot.html"));
        assert!(matches!(
            backend.render(&figure()),
            Err(vectorviz_core::Error::Io(_))
        ));
    }
}
