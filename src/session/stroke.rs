use crate::domain::Point;

/// Append-only point buffer for the stroke being drawn
///
/// Candidates closer than `min_distance` to the last kept point are
/// dropped so that fingertip jitter does not pile up near-duplicates.
#[derive(Debug, Clone)]
pub struct StrokeBuffer {
    points: Vec<Point>,
    min_distance: f64,
}

impl StrokeBuffer {
    pub fn new(min_distance: f64) -> Self {
        Self {
            points: Vec::new(),
            min_distance,
        }
    }

    /// Drop the current stroke and begin a new one at `first`
    pub fn start(&mut self, first: Point) {
        self.points.clear();
        self.points.push(first);
    }

    /// Append `candidate` if it is far enough from the last point.
    ///
    /// Returns whether the point was kept.
    pub fn offer(&mut self, candidate: Point) -> bool {
        match self.points.last() {
            Some(last) if last.distance_to(&candidate) < self.min_distance => false,
            _ => {
                self.points.push(candidate);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }
}
