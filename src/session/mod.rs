//! Drawing session
//!
//! Owns the single stroke buffer and the game state around it. Each camera
//! frame is handled in a fixed order: ingest the fingertip, then analyze the
//! stroke if it is big enough. Ending the draw gesture or losing tracking
//! finalizes the stroke with one last analysis.

pub mod stroke;

use std::time::Duration;

use log::{debug, trace};
use serde::Serialize;

use crate::analysis::ShapeAnalyzer;
use crate::config::{AnalyzerConfig, SessionConfig};
use crate::domain::{AccuracyBand, Frame, Point, ShapeScore};

pub use stroke::StrokeBuffer;

pub const TOO_SMALL: &str = "Too small! Draw a bigger circle";

/// Message for the player, optionally hidden after a delay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<Duration>,
}

impl Feedback {
    pub fn new(message: impl Into<String>, auto_hide: Option<Duration>) -> Self {
        Self {
            message: message.into(),
            auto_hide,
        }
    }
}

/// What a frame did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Not playing, frame dropped
    Ignored,
    /// Playing but not drawing
    Idle,
    StrokeStarted { point: Point },
    PointAdded { point_count: usize },
    PointSkipped { point_count: usize },
    /// Live preview of the in-progress stroke
    Live {
        score: ShapeScore,
        band: AccuracyBand,
        point_count: usize,
    },
    /// Stroke ended below the minimum point count
    TooSmall {
        point_count: usize,
        feedback: Feedback,
    },
    Finalized {
        score: ShapeScore,
        feedback: Feedback,
    },
}

/// Running totals across finalized strokes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub strokes_scored: usize,
    pub strokes_too_small: usize,
    pub circles: usize,
    pub best_circularity: Option<u8>,
}

#[derive(Debug)]
pub struct DrawingSession {
    analyzer: ShapeAnalyzer,
    config: SessionConfig,
    stroke: StrokeBuffer,
    playing: bool,
    drawing: bool,
    last_score: Option<ShapeScore>,
    feedback: Option<Feedback>,
    stats: SessionStats,
}

impl DrawingSession {
    pub fn new(analyzer_config: AnalyzerConfig, config: SessionConfig) -> Self {
        Self {
            analyzer: ShapeAnalyzer::new(analyzer_config),
            stroke: StrokeBuffer::new(config.min_point_distance),
            config,
            playing: false,
            drawing: false,
            last_score: None,
            feedback: None,
            stats: SessionStats::default(),
        }
    }

    /// Enter play mode with a fresh canvas
    pub fn start_game(&mut self) {
        debug!("Starting game");
        self.clear();
        self.playing = true;
    }

    /// Leave play mode and drop the canvas
    pub fn return_to_menu(&mut self) {
        debug!("Returning to menu");
        self.stroke.clear();
        self.drawing = false;
        self.playing = false;
    }

    /// Wipe the canvas, the last score and any feedback
    pub fn clear(&mut self) {
        self.stroke.clear();
        self.drawing = false;
        self.last_score = None;
        self.feedback = None;
    }

    pub fn on_frame(&mut self, frame: Frame) -> SessionEvent {
        if !self.playing {
            return SessionEvent::Ignored;
        }

        match (self.drawing, frame.fingertip, frame.gesture.is_draw()) {
            (false, Some(point), true) => {
                self.stroke.start(point);
                self.drawing = true;
                self.feedback = None;
                debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
                SessionEvent::StrokeStarted { point }
            }
            (false, _, _) => SessionEvent::Idle,
            (true, Some(point), true) => self.continue_stroke(point),
            (true, None, _) => {
                debug!("Tracking lost mid-stroke");
                self.finish_stroke()
            }
            (true, Some(_), false) => self.finish_stroke(),
        }
    }

    fn continue_stroke(&mut self, point: Point) -> SessionEvent {
        let added = self.stroke.offer(point);
        let point_count = self.stroke.len();

        if point_count > self.config.min_points {
            let score = self.analyzer.analyze(self.stroke.points());
            let band = score.band();
            trace!(
                "Live score {} ({}) over {} points",
                score.circularity,
                band.label(),
                point_count
            );
            return SessionEvent::Live {
                score,
                band,
                point_count,
            };
        }

        if added {
            SessionEvent::PointAdded { point_count }
        } else {
            SessionEvent::PointSkipped { point_count }
        }
    }

    /// Close the current stroke and score it.
    ///
    /// A stroke that already ended is not scored again.
    pub fn finish_stroke(&mut self) -> SessionEvent {
        if !self.drawing {
            return SessionEvent::Idle;
        }
        self.drawing = false;
        let point_count = self.stroke.len();

        if point_count < self.config.min_points {
            debug!(
                "Stroke too small: {} points (minimum {})",
                point_count, self.config.min_points
            );
            let feedback = Feedback::new(TOO_SMALL, Some(self.config.prompt_display()));
            self.feedback = Some(feedback.clone());
            self.stats.strokes_too_small += 1;
            return SessionEvent::TooSmall {
                point_count,
                feedback,
            };
        }

        let score = self.analyzer.analyze(self.stroke.points());
        debug!(
            "Stroke finalized: {} points, {}% {} ({})",
            point_count,
            score.circularity,
            score.shape_name(),
            if score.is_circle { "circle" } else { "not a circle" }
        );

        self.stats.strokes_scored += 1;
        if score.is_circle {
            self.stats.circles += 1;
        }
        self.stats.best_circularity = Some(
            self.stats
                .best_circularity
                .map_or(score.circularity, |best| best.max(score.circularity)),
        );

        let feedback = Feedback::new(
            score.feedback.clone(),
            Some(self.config.result_display()),
        );
        self.feedback = Some(feedback.clone());
        self.last_score = Some(score.clone());

        SessionEvent::Finalized { score, feedback }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Points of the current or most recently finished stroke
    pub fn stroke(&self) -> &[Point] {
        self.stroke.points()
    }

    pub fn last_score(&self) -> Option<&ShapeScore> {
        self.last_score.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn analyzer(&self) -> &ShapeAnalyzer {
        &self.analyzer
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default(), SessionConfig::default())
    }
}
