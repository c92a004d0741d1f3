//! Geometric features of a stroke
//!
//! Everything the decision table needs is measured here in one pass over
//! the points:
//! - centroid and radius statistics (mean, population std-dev)
//! - angular sector histogram around the centroid
//! - start/end closure gap

use std::f64::consts::TAU;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::domain::Point;

/// Intermediate measurements of a stroke, before any decision is made
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeMetrics {
    pub point_count: usize,
    pub center: Point,
    pub avg_radius: f64,
    pub radius_std_dev: f64,
    /// `1 - stdDev/avgRadius` as a rounded percent
    pub radius_consistency: u8,
    pub sector_counts: Vec<usize>,
    pub occupied_sectors: usize,
    /// Share of occupied sectors as a rounded percent
    pub angular_score: u8,
    pub closure_distance: f64,
    pub closure_percent: f64,
    pub closed: bool,
    /// Weighted blend of angular, consistency and closure, 0-100
    pub combined: u8,
}

/// Measure a stroke. Returns `None` for fewer than two points.
pub fn measure(points: &[Point], config: &AnalyzerConfig) -> Option<ShapeMetrics> {
    if points.len() < 2 {
        return None;
    }

    let center = centroid(points);
    let radii: Vec<f64> = points.iter().map(|p| p.distance_to(&center)).collect();
    let (avg_radius, radius_std_dev) = mean_and_std_dev(&radii);
    let radius_consistency = to_percent(consistency_ratio(avg_radius, radius_std_dev));

    let sector_counts = sector_histogram(points, &center, config.sector_count);
    let occupied_sectors = count_occupied(&sector_counts, points.len(), config.sector_occupancy);
    let angular_score = to_percent(occupied_sectors as f64 / config.sector_count.max(1) as f64);

    let first = points[0];
    let last = points[points.len() - 1];
    let closure_distance = first.distance_to(&last);
    let closed = is_closed(closure_distance, avg_radius, config.closure_ratio);
    let closure_percent = closure_percent(closure_distance, avg_radius);

    let weights = &config.weights;
    let combined = (weights.angular * angular_score as f64
        + weights.consistency * radius_consistency as f64
        + weights.closure * closure_percent)
        .round()
        .clamp(0.0, 100.0) as u8;

    Some(ShapeMetrics {
        point_count: points.len(),
        center,
        avg_radius,
        radius_std_dev,
        radius_consistency,
        sector_counts,
        occupied_sectors,
        angular_score,
        closure_distance,
        closure_percent,
        closed,
        combined,
    })
}

/// Arithmetic mean of all points
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sum_x / n, sum_y / n)
}

/// Mean and population standard deviation
fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// `max(0, 1 - stdDev/avgRadius)`, zero when every point sits on the centroid
pub fn consistency_ratio(avg_radius: f64, std_dev: f64) -> f64 {
    if avg_radius <= 0.0 {
        return 0.0;
    }
    (1.0 - std_dev / avg_radius).max(0.0)
}

/// Angle of `p` around `center`, normalized to [0, 2pi)
pub fn normalized_angle(p: &Point, center: &Point) -> f64 {
    let angle = (p.y - center.y).atan2(p.x - center.x);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Count points per equal angular sector, sector 0 starting at angle 0
pub fn sector_histogram(points: &[Point], center: &Point, sector_count: usize) -> Vec<usize> {
    let sector_count = sector_count.max(1);
    let sector_width = TAU / sector_count as f64;
    let mut counts = vec![0usize; sector_count];

    for p in points {
        let angle = normalized_angle(p, center);
        // angle + TAU can round up to exactly TAU
        let index = ((angle / sector_width) as usize).min(sector_count - 1);
        counts[index] += 1;
    }

    counts
}

/// Number of sectors holding at least `occupancy` of all points
pub fn count_occupied(counts: &[usize], total: usize, occupancy: f64) -> usize {
    let min_count = total as f64 * occupancy;
    counts.iter().filter(|&&c| c as f64 >= min_count).count()
}

/// Closed iff the start/end gap is strictly below `ratio * avg_radius`
pub fn is_closed(gap: f64, avg_radius: f64, ratio: f64) -> bool {
    gap < ratio * avg_radius
}

/// `max(0, 100 * (1 - gap/avgRadius))`, zero for a zero radius
pub fn closure_percent(gap: f64, avg_radius: f64) -> f64 {
    if avg_radius <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - gap / avg_radius)).max(0.0)
}

fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
