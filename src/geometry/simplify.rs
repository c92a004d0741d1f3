use geo::{LineString, Simplify};

use crate::domain::Point;

/// Ramer-Douglas-Peucker simplification of a stroke for export.
///
/// Scoring always runs on the raw stroke; this only shrinks what gets
/// written out.
pub fn simplify_stroke(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 4 || epsilon <= 0.0 {
        return points.to_vec();
    }

    let line: LineString<f64> = points
        .iter()
        .map(|p| geo::coord! { x: p.x, y: p.y })
        .collect();

    let simplified = line.simplify(&epsilon);

    simplified.0.into_iter().map(|c| Point::new(c.x, c.y)).collect()
}

/// Tolerance scaled to the drawing size: 1% of the larger extent, at least half a pixel
pub fn export_epsilon(width: f64, height: f64) -> f64 {
    (width.max(height) * 0.01).max(0.5)
}
