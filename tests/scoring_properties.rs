use aircircle::analysis::{ShapeAnalyzer, degenerate_score};
use aircircle::config::AnalyzerConfig;
use aircircle::geometry::synth;
use aircircle::{Frame, DrawingSession, Point, SessionEvent, ShapeKind, analyze_shape};

fn center() -> Point {
    Point::new(320.0, 240.0)
}

#[test]
fn test_short_sequences_are_degenerate() {
    assert_eq!(analyze_shape(&[]), degenerate_score());
    assert_eq!(analyze_shape(&[Point::new(3.0, 4.0)]), degenerate_score());
}

#[test]
fn test_even_circle_is_a_top_tier_circle() {
    let analyzer = ShapeAnalyzer::default();
    for n in [24, 36, 72] {
        let step = 360.0 / n as f64;
        // half-step phase keeps every sample off a sector boundary
        let points = synth::circle(center(), 150.0, n, (step / 2.0).to_radians());
        let metrics = analyzer.measure(&points).unwrap();
        let score = analyzer.analyze(&points);

        assert_eq!(metrics.angular_score, 100, "n = {}", n);
        assert_eq!(metrics.radius_consistency, 100, "n = {}", n);
        assert!(metrics.closed, "n = {}", n);
        assert!(score.is_circle, "n = {}", n);
        assert!(score.circularity >= 90, "n = {}", n);
    }
}

#[test]
fn test_closing_duplicate_still_a_circle() {
    let mut points = synth::circle(center(), 150.0, 24, 7.5_f64.to_radians());
    points.push(points[0]);
    let score = analyze_shape(&points);
    assert!(score.is_circle);
    assert_eq!(score.shape, ShapeKind::Circle);
}

#[test]
fn test_corner_weighted_square() {
    let analyzer = ShapeAnalyzer::default();
    let points = synth::square(center(), 120.0, 40);
    let metrics = analyzer.measure(&points).unwrap();
    let score = analyzer.analyze(&points);

    assert!(metrics.occupied_sectors <= 4);
    assert!(metrics.radius_consistency >= 40);
    assert!(!score.is_circle);
    assert_eq!(score.shape, ShapeKind::Square);
    assert_eq!(score.feedback, "Looks like a Square! Aim for a circle");
}

#[test]
fn test_corner_clusters_only() {
    let mut points = Vec::new();
    for corner in [45.0_f64, 135.0, 225.0, 315.0] {
        for k in 0..5 {
            let a = (corner - 4.0 + 2.0 * k as f64).to_radians();
            points.push(Point::new(100.0 * a.cos(), 100.0 * a.sin()));
        }
    }
    points.push(points[0]);

    let analyzer = ShapeAnalyzer::default();
    let metrics = analyzer.measure(&points).unwrap();
    assert_eq!(metrics.occupied_sectors, 4);
    assert_eq!(analyzer.analyze(&points).shape, ShapeKind::Square);
}

#[test]
fn test_triangle_occupies_few_sectors() {
    let analyzer = ShapeAnalyzer::default();
    let points = synth::triangle(center(), 150.0, 30);
    let metrics = analyzer.measure(&points).unwrap();
    let score = analyzer.analyze(&points);

    assert!(metrics.occupied_sectors <= 3);
    assert!(!score.is_circle);
}

#[test]
fn test_open_arc_asks_to_close() {
    let points = synth::arc(center(), 150.0, 40, 0.0, 200.0_f64.to_radians());
    let score = analyze_shape(&points);
    assert!(!score.is_circle);
    assert_eq!(score.feedback, "Close the shape! Finish where you started");
}

#[test]
fn test_flat_ellipse_is_not_a_circle() {
    let points = synth::ellipse(center(), 200.0, 70.0, 60);
    assert!(!analyze_shape(&points).is_circle);
}

#[test]
fn test_circularity_stays_in_range() {
    let analyzer = ShapeAnalyzer::default();
    let strokes = vec![
        synth::line(Point::new(0.0, 0.0), Point::new(500.0, 10.0), 30),
        synth::jitter(&synth::circle(center(), 100.0, 60, 0.0), 40.0, 3),
        vec![Point::new(1.0, 1.0); 30],
        synth::square(center(), 10.0, 16),
    ];
    for points in strokes {
        let score = analyzer.analyze(&points);
        assert!(score.circularity <= 100);
        if score.is_circle {
            assert!(analyzer.measure(&points).unwrap().closed);
        }
    }
}

#[test]
fn test_repeated_analysis_is_identical() {
    let analyzer = ShapeAnalyzer::new(AnalyzerConfig::default());
    let points = synth::jitter(&synth::ellipse(center(), 140.0, 120.0, 50), 5.0, 42);
    let scores: Vec<_> = (0..3).map(|_| analyzer.analyze(&points)).collect();
    assert_eq!(scores[0], scores[1]);
    assert_eq!(scores[1], scores[2]);
}

/// Inserts antipodal-balanced points at R(1 +/- delta) in the middle of an
/// even circle, so centroid, mean radius, sectors and closure stay fixed.
fn circle_with_spread(delta: f64) -> Vec<Point> {
    let r = 100.0;
    let base = synth::circle(Point::new(0.0, 0.0), r, 24, 7.5_f64.to_radians());
    let extra: Vec<Point> = (0..12)
        .map(|k| {
            let a = (7.5 + 30.0 * k as f64).to_radians();
            let radius = if k % 2 == 0 { r * (1.0 + delta) } else { r * (1.0 - delta) };
            Point::new(radius * a.cos(), radius * a.sin())
        })
        .collect();

    let mut points = base[..12].to_vec();
    points.extend(extra);
    points.extend_from_slice(&base[12..]);
    points
}

#[test]
fn test_radius_spread_never_raises_combined() {
    let analyzer = ShapeAnalyzer::default();
    let mut previous = u8::MAX;
    for step in 0..9 {
        let points = circle_with_spread(step as f64 * 0.1);
        let metrics = analyzer.measure(&points).unwrap();
        assert_eq!(metrics.angular_score, 100);
        assert!(metrics.combined <= previous, "step {}", step);
        previous = metrics.combined;
    }
}

#[test]
fn test_session_live_then_final() {
    let mut session = DrawingSession::default();
    session.start_game();

    let points = synth::circle(center(), 150.0, 40, 0.0);
    let live: Vec<_> = points
        .iter()
        .map(|&p| session.on_frame(Frame::drawing(p)))
        .filter(|e| matches!(e, SessionEvent::Live { .. }))
        .collect();
    assert_eq!(live.len(), 40 - 15);

    match session.on_frame(Frame::lost()) {
        SessionEvent::Finalized { score, .. } => {
            assert_eq!(score, analyze_shape(&points));
        }
        other => panic!("expected Finalized, got {:?}", other),
    }
}
