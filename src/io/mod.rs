pub mod error;
pub mod report;
pub mod stroke_file;

pub use error::StrokeFileError;
pub use report::{StrokeReport, write_report};
pub use stroke_file::{load_frames, load_strokes};
