use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{Result, StrokeFileError};
use crate::analysis::{ShapeAnalyzer, ShapeMetrics};
use crate::domain::{AccuracyBand, Point, ShapeScore};
use crate::geometry::{Bounds, export_epsilon, path_length, simplify_stroke};

/// Everything known about one scored stroke
#[derive(Debug, Clone, Serialize)]
pub struct StrokeReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub score: ShapeScore,
    pub band: AccuracyBand,
    pub metrics: Option<ShapeMetrics>,
    pub bounds: Option<Bounds>,
    pub path_length: f64,
    /// Simplified outline for display, not for re-scoring
    pub outline: Vec<Point>,
}

impl StrokeReport {
    pub fn build(index: usize, points: &[Point], analyzer: &ShapeAnalyzer) -> Self {
        let (score, metrics) = analyzer.analyze_detailed(points);
        let bounds = Bounds::from_points(points);
        let outline = match bounds {
            Some(b) => simplify_stroke(points, export_epsilon(b.width(), b.height())),
            None => Vec::new(),
        };

        Self {
            index,
            label: None,
            band: score.band(),
            score,
            metrics,
            bounds,
            path_length: path_length(points),
            outline,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Write reports as pretty-printed JSON
pub fn write_report(path: &Path, reports: &[StrokeReport]) -> Result<()> {
    let io_err = |source: std::io::Error| StrokeFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, reports).map_err(|source| {
        StrokeFileError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(())
}
