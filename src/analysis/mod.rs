//! Shape analyzer
//!
//! A pure function from an ordered stroke to a [`ShapeScore`]. The same
//! analyzer backs both the live per-frame preview and the final verdict;
//! nothing is carried between calls.

pub mod baseline;
pub mod classify;
pub mod features;

use serde::Deserialize;

use crate::config::AnalyzerConfig;
use crate::domain::{Point, ShapeScore};

pub use classify::degenerate_score;
pub use features::{ShapeMetrics, measure};

/// Which scorer turns metrics into a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Angular coverage, radius consistency and closure, with shape classification
    #[default]
    Full,
    /// Radius consistency only
    RadiusOnly,
}

#[derive(Debug, Clone, Default)]
pub struct ShapeAnalyzer {
    config: AnalyzerConfig,
}

impl ShapeAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Features of the stroke, `None` below two points
    pub fn measure(&self, points: &[Point]) -> Option<ShapeMetrics> {
        measure(points, &self.config)
    }

    /// Score a stroke.
    ///
    /// Fewer than two points yields the degenerate score. Callers are
    /// expected to gate on their own minimum point count before asking for
    /// a real verdict.
    pub fn analyze(&self, points: &[Point]) -> ShapeScore {
        match self.measure(points) {
            Some(metrics) => self.score(&metrics),
            None => degenerate_score(),
        }
    }

    /// Score and metrics together, for reporting
    pub fn analyze_detailed(&self, points: &[Point]) -> (ShapeScore, Option<ShapeMetrics>) {
        match self.measure(points) {
            Some(metrics) => (self.score(&metrics), Some(metrics)),
            None => (degenerate_score(), None),
        }
    }

    pub fn score(&self, metrics: &ShapeMetrics) -> ShapeScore {
        match self.config.mode {
            ScoringMode::Full => classify::decide(metrics, &self.config),
            ScoringMode::RadiusOnly => baseline::decide_radius_only(metrics, &self.config),
        }
    }
}

/// Score a stroke with default thresholds
pub fn analyze_shape(points: &[Point]) -> ShapeScore {
    ShapeAnalyzer::default().analyze(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeKind;
    use crate::geometry::synth;

    #[test]
    fn test_degenerate_inputs() {
        let analyzer = ShapeAnalyzer::default();
        for points in [vec![], vec![Point::new(10.0, 10.0)]] {
            let score = analyzer.analyze(&points);
            assert_eq!(score, degenerate_score());
        }
    }

    #[test]
    fn test_perfect_circle_scores_top_tier() {
        let points = synth::circle(Point::new(200.0, 200.0), 120.0, 24, 7.5_f64.to_radians());
        let score = analyze_shape(&points);

        assert!(score.is_circle);
        assert_eq!(score.shape, ShapeKind::Circle);
        assert!(score.circularity >= 90);
        assert_eq!(score.feedback, "Perfect circle! Incredible!");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = ShapeAnalyzer::default();
        let points = synth::jitter(
            &synth::circle(Point::new(0.0, 0.0), 90.0, 60, 0.3),
            6.0,
            7,
        );
        let first = analyzer.analyze(&points);
        let second = analyzer.analyze(&points);
        assert_eq!(first, second);

        let (m1, m2) = (analyzer.measure(&points), analyzer.measure(&points));
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_radius_only_mode() {
        let config = AnalyzerConfig {
            mode: ScoringMode::RadiusOnly,
            ..AnalyzerConfig::default()
        };
        let analyzer = ShapeAnalyzer::new(config);
        let points = synth::circle(Point::new(0.0, 0.0), 50.0, 30, 0.1);
        let score = analyzer.analyze(&points);
        assert_eq!(score.circularity, 100);
        assert!(score.is_circle);
    }

    #[test]
    fn test_analyze_detailed_matches_analyze() {
        let analyzer = ShapeAnalyzer::default();
        let points = synth::square(Point::new(0.0, 0.0), 100.0, 40);
        let (score, metrics) = analyzer.analyze_detailed(&points);
        assert_eq!(score, analyzer.analyze(&points));
        assert_eq!(metrics.unwrap().point_count, points.len());
    }
}
