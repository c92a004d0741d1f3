use crate::config::AnalyzerConfig;
use crate::domain::{ShapeKind, ShapeScore};

use super::features::ShapeMetrics;

pub const DRAW_BIGGER: &str = "Draw a bigger circle!";
pub const CLOSE_THE_SHAPE: &str = "Close the shape! Finish where you started";
pub const MORE_CIRCULAR: &str = "Almost! Try to be more circular";
pub const KEEP_PRACTICING: &str = "Keep practicing!";

const PRAISE: [&str; 4] = [
    "Perfect circle! Incredible!",
    "Excellent circle!",
    "Great job, that's a circle!",
    "Nice circle, keep refining it!",
];

/// Score returned when there is nothing to measure
pub fn degenerate_score() -> ShapeScore {
    ShapeScore {
        circularity: 0,
        is_circle: false,
        shape: ShapeKind::Unknown,
        feedback: DRAW_BIGGER.to_string(),
    }
}

/// All three gates must pass; a high combined score cannot compensate.
pub fn is_circle(metrics: &ShapeMetrics, config: &AnalyzerConfig) -> bool {
    metrics.angular_score >= config.circle_min_angular
        && metrics.radius_consistency >= config.circle_min_consistency
        && metrics.closed
}

/// Decision table over angular score, consistency and occupied sectors
pub fn classify(metrics: &ShapeMetrics, is_circle: bool, config: &AnalyzerConfig) -> ShapeKind {
    let t = &config.classify;
    let angular = metrics.angular_score;
    let consistency = metrics.radius_consistency;
    let sectors = metrics.occupied_sectors;

    if is_circle {
        ShapeKind::Circle
    } else if sectors <= t.square_max_sectors && consistency >= t.square_min_consistency {
        ShapeKind::Square
    } else if sectors <= t.triangle_max_sectors && consistency >= t.triangle_min_consistency {
        ShapeKind::Triangle
    } else if angular >= t.oval_min_angular && consistency < t.oval_max_consistency {
        ShapeKind::OvalEllipse
    } else if angular >= t.rectangle_min_angular && consistency < t.rectangle_max_consistency {
        ShapeKind::Rectangle
    } else if angular < t.polygon_max_angular {
        ShapeKind::Polygon
    } else {
        ShapeKind::Irregular
    }
}

/// Feedback line for a finished decision
pub fn feedback(
    closed: bool,
    is_circle: bool,
    shape: ShapeKind,
    combined: u8,
    config: &AnalyzerConfig,
) -> String {
    if !closed {
        return CLOSE_THE_SHAPE.to_string();
    }
    if !is_circle {
        return format!("Looks like a {}! Aim for a circle", shape.name());
    }
    for (floor, message) in config.praise_tiers.iter().zip(PRAISE) {
        if combined >= *floor {
            return message.to_string();
        }
    }
    if combined >= config.near_miss {
        MORE_CIRCULAR.to_string()
    } else {
        KEEP_PRACTICING.to_string()
    }
}

/// Turn measured features into the final score
pub fn decide(metrics: &ShapeMetrics, config: &AnalyzerConfig) -> ShapeScore {
    let is_circle = is_circle(metrics, config);
    let shape = classify(metrics, is_circle, config);
    ShapeScore {
        circularity: metrics.combined,
        is_circle,
        shape,
        feedback: feedback(metrics.closed, is_circle, shape, metrics.combined, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn metrics(angular: u8, consistency: u8, sectors: usize, closed: bool) -> ShapeMetrics {
        ShapeMetrics {
            point_count: 40,
            center: Point::new(0.0, 0.0),
            avg_radius: 100.0,
            radius_std_dev: 100.0 * (1.0 - consistency as f64 / 100.0),
            radius_consistency: consistency,
            sector_counts: vec![0; 12],
            occupied_sectors: sectors,
            angular_score: angular,
            closure_distance: if closed { 0.0 } else { 100.0 },
            closure_percent: if closed { 100.0 } else { 0.0 },
            closed,
            combined: (0.5 * angular as f64
                + 0.3 * consistency as f64
                + if closed { 20.0 } else { 0.0 })
            .round() as u8,
        }
    }

    #[test]
    fn test_circle_gates() {
        let config = AnalyzerConfig::default();
        assert!(is_circle(&metrics(75, 50, 9, true), &config));
        assert!(!is_circle(&metrics(74, 100, 9, true), &config));
        assert!(!is_circle(&metrics(100, 49, 12, true), &config));
        assert!(!is_circle(&metrics(100, 100, 12, false), &config));
    }

    #[test]
    fn test_angular_74_is_not_a_circle() {
        let config = AnalyzerConfig::default();
        let score = decide(&metrics(74, 95, 9, true), &config);
        assert!(!score.is_circle);
        assert_ne!(score.shape, ShapeKind::Circle);
    }

    #[test]
    fn test_decision_table_order() {
        let config = AnalyzerConfig::default();
        let kind = |a, c, s| classify(&metrics(a, c, s, true), false, &config);

        assert_eq!(kind(33, 80, 4), ShapeKind::Square);
        // three sectors with consistency >= 40 is still caught by the square rule
        assert_eq!(kind(25, 80, 3), ShapeKind::Square);
        assert_eq!(kind(25, 37, 3), ShapeKind::Triangle);
        assert_eq!(kind(67, 44, 8), ShapeKind::OvalEllipse);
        assert_eq!(kind(58, 30, 7), ShapeKind::Rectangle);
        assert_eq!(kind(50, 39, 6), ShapeKind::Rectangle);
        assert_eq!(kind(33, 20, 4), ShapeKind::Polygon);
        assert_eq!(kind(67, 80, 8), ShapeKind::Irregular);
        assert_eq!(
            classify(&metrics(100, 100, 12, true), true, &config),
            ShapeKind::Circle
        );
    }

    #[test]
    fn test_feedback_order() {
        let config = AnalyzerConfig::default();
        let fb = |closed, circle, combined| {
            feedback(closed, circle, ShapeKind::Square, combined, &config)
        };

        assert_eq!(fb(false, true, 95), CLOSE_THE_SHAPE);
        assert_eq!(fb(true, false, 95), "Looks like a Square! Aim for a circle");
        assert_eq!(fb(true, true, 90), PRAISE[0]);
        assert_eq!(fb(true, true, 89), PRAISE[1]);
        assert_eq!(fb(true, true, 70), PRAISE[2]);
        assert_eq!(fb(true, true, 60), PRAISE[3]);
        assert_eq!(fb(true, true, 55), MORE_CIRCULAR);
        assert_eq!(fb(true, true, 49), KEEP_PRACTICING);
    }

    #[test]
    fn test_degenerate_score() {
        let score = degenerate_score();
        assert_eq!(score.circularity, 0);
        assert!(!score.is_circle);
        assert_eq!(score.shape_name(), "Unknown");
        assert_eq!(score.feedback, DRAW_BIGGER);
    }
}
