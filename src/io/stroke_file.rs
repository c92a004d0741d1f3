use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::{Result, StrokeFileError};
use crate::domain::{Frame, Point};

/// Accepted layouts of a stroke file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StrokeDocument {
    Many(Vec<Vec<Point>>),
    Single(Vec<Point>),
}

/// Load strokes from JSON.
///
/// The file holds either one stroke (`[{"x":..,"y":..}, ...]`) or a list of
/// strokes (`[[...], [...]]`).
pub fn load_strokes(path: &Path) -> Result<Vec<Vec<Point>>> {
    let contents = read(path)?;
    parse_strokes(&contents, path)
}

fn parse_strokes(contents: &str, path: &Path) -> Result<Vec<Vec<Point>>> {
    let doc: StrokeDocument =
        serde_json::from_str(contents).map_err(|source| StrokeFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let strokes = match doc {
        StrokeDocument::Many(strokes) => strokes,
        StrokeDocument::Single(points) if points.is_empty() => Vec::new(),
        StrokeDocument::Single(points) => vec![points],
    };

    if strokes.is_empty() {
        return Err(StrokeFileError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(strokes)
}

/// Load a recorded frame stream for replay
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let contents = read(path)?;
    let frames: Vec<Frame> =
        serde_json::from_str(&contents).map_err(|source| StrokeFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if frames.is_empty() {
        return Err(StrokeFileError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(frames)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| StrokeFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
