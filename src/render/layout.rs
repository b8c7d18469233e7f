// src/render/layout.rs
//! Node placement.

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Moves `length` units from `self` towards `toward`.
    #[must_use]
    pub fn step_toward(&self, toward: Point, length: f64) -> Point {
        let dist = self.distance(toward);
        if dist == 0.0 {
            return *self;
        }
        Point::new(
            self.x + (toward.x - self.x) / dist * length,
            self.y + (toward.y - self.y) / dist * length,
        )
    }
}

/// Places `count` points evenly on a circle, counter-clockwise starting at
/// three o'clock. A single point sits at the center.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular(count: usize, center: Point, radius: f64) -> Vec<Point> {
    if count == 1 {
        return vec![center];
    }
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            // SVG y grows downwards.
            Point::new(
                center.x + radius * angle.cos(),
                center.y - radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_points_lie_on_circle() {
        let center = Point::new(100.0, 100.0);
        let points = circular(6, center, 50.0);
        assert_eq!(points.len(), 6);
        for p in &points {
            assert!((center.distance(*p) - 50.0).abs() < EPS);
        }
        assert!((points[0].x - 150.0).abs() < EPS);
        assert!((points[0].y - 100.0).abs() < EPS);
        // Quarter turn counter-clockwise is straight up on screen.
        let four = circular(4, center, 50.0);
        assert!((four[1].y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_counts() {
        let center = Point::new(3.0, 4.0);
        assert!(circular(0, center, 10.0).is_empty());
        assert_eq!(circular(1, center, 10.0), vec![center]);
    }

    #[test]
    fn test_step_toward() {
        let p = Point::new(0.0, 0.0).step_toward(Point::new(10.0, 0.0), 3.0);
        assert!((p.x - 3.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
        let same = Point::new(1.0, 1.0);
        assert_eq!(same.step_toward(same, 5.0), same);
    }
}
