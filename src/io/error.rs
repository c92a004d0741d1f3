use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrokeFileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} contains no strokes")]
    Empty { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, StrokeFileError>;
