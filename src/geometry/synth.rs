//! Deterministic synthetic strokes
//!
//! Used by the `demo` command and by tests. Polygon outlines dwell near
//! their corners the way a hand slows down to turn, so most samples land
//! close to the vertices.

use std::f64::consts::TAU;

use crate::domain::Point;

/// `n` points evenly spaced on a full circle, starting at `phase` radians
pub fn circle(center: Point, radius: f64, n: usize, phase: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = phase + TAU * i as f64 / n as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// `n` points on an arc from `start` sweeping `sweep` radians, both ends included
pub fn arc(center: Point, radius: f64, n: usize, start: f64, sweep: f64) -> Vec<Point> {
    let steps = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let a = start + sweep * i as f64 / steps;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Axis-aligned ellipse sampled evenly in its parameter
pub fn ellipse(center: Point, rx: f64, ry: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
        })
        .collect()
}

/// Square outline with corners on the diagonals, dwelling at the corners
pub fn square(center: Point, half_side: f64, n: usize) -> Vec<Point> {
    let h = half_side;
    let vertices = [
        Point::new(center.x + h, center.y + h),
        Point::new(center.x - h, center.y + h),
        Point::new(center.x - h, center.y - h),
        Point::new(center.x + h, center.y - h),
    ];
    polygon_with_dwell(&vertices, n)
}

/// Equilateral triangle inscribed in `radius`, one vertex at 15 degrees
pub fn triangle(center: Point, radius: f64, n: usize) -> Vec<Point> {
    let vertices: Vec<Point> = [15.0_f64, 135.0, 255.0]
        .iter()
        .map(|deg| {
            let a = deg.to_radians();
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    polygon_with_dwell(&vertices, n)
}

/// Straight stroke from `from` to `to`, both ends included
pub fn line(from: Point, to: Point, n: usize) -> Vec<Point> {
    let steps = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let t = i as f64 / steps;
            Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
        })
        .collect()
}

/// Closed polygon outline, `n` points spread over the edges
///
/// Samples sit at the midpoints of equal parameter steps and are eased
/// toward both ends of each edge.
pub fn polygon_with_dwell(vertices: &[Point], n: usize) -> Vec<Point> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let edges = vertices.len();
    let mut points = Vec::with_capacity(n);

    for e in 0..edges {
        let a = vertices[e];
        let b = vertices[(e + 1) % edges];
        // spread the remainder over the first edges
        let per_edge = n / edges + usize::from(e < n % edges);
        for j in 0..per_edge {
            let s = (j as f64 + 0.5) / per_edge as f64;
            let t = corner_ease(s);
            points.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
        }
    }

    points
}

fn corner_ease(s: f64) -> f64 {
    let a = s.powi(4);
    let b = (1.0 - s).powi(4);
    a / (a + b)
}

/// Offset every point by a repeatable pseudo-random amount in `[-amplitude, amplitude]`
pub fn jitter(points: &[Point], amplitude: f64, seed: u32) -> Vec<Point> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let dx = noise(i as f64, seed as f64) * amplitude;
            let dy = noise(i as f64 + 0.5, seed as f64 + 17.0) * amplitude;
            Point::new(p.x + dx, p.y + dy)
        })
        .collect()
}

fn noise(x: f64, seed: f64) -> f64 {
    let v = (x * 12.9898 + seed * 78.233).sin() * 43758.5453;
    (v - v.floor()) * 2.0 - 1.0
}
