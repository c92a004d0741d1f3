//! aircircle - score how circular a fingertip-traced air drawing is

pub mod analysis;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod io;
pub mod session;

pub use analysis::{ScoringMode, ShapeAnalyzer, ShapeMetrics, analyze_shape};
pub use domain::{AccuracyBand, Frame, GestureState, Point, ShapeKind, ShapeScore};
pub use session::{DrawingSession, Feedback, SessionEvent};
