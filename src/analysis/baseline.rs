//! Radius-only scoring
//!
//! The older scorer: circularity is just radius consistency, and the only
//! shapes it can name are "Circle" and "Irregular Shape". It ignores angular
//! coverage, so it cannot tell a square from a circle, but it is kept as a
//! regression baseline for the full scorer.

use crate::config::AnalyzerConfig;
use crate::domain::{ShapeKind, ShapeScore};

use super::classify::feedback;
use super::features::ShapeMetrics;

pub fn decide_radius_only(metrics: &ShapeMetrics, config: &AnalyzerConfig) -> ShapeScore {
    let circularity = metrics.radius_consistency;
    let is_circle = circularity >= config.baseline_circle_consistency && metrics.closed;
    let shape = if is_circle {
        ShapeKind::Circle
    } else {
        ShapeKind::Irregular
    };

    ShapeScore {
        circularity,
        is_circle,
        shape,
        feedback: feedback(metrics.closed, is_circle, shape, circularity, config),
    }
}
