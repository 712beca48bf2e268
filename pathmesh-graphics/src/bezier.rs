//! Cubic Bezier segment operations.
//!
//! This module provides the `CubicSegment` type used by the curve sampler:
//! Bernstein-form evaluation, uniform sampling, and quadratic elevation.

use crate::math::bernstein;
use crate::types::{Point, Scalar, index_to_scalar};

/// Four control points of a cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    /// Create a new cubic segment from four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Exact cubic form of the quadratic segment `(p0, q, p2)`.
    ///
    /// Inner controls sit two thirds of the way from each endpoint to `q`.
    #[must_use]
    pub fn from_quadratic(p0: Point, q: Point, p2: Point) -> Self {
        Self {
            p0,
            p1: p0.lerp(q, 2.0 / 3.0),
            p2: p2.lerp(q, 2.0 / 3.0),
            p3: p2,
        }
    }

    /// The control polygon in order.
    #[must_use]
    pub const fn control_points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Evaluate the point at parameter `t` in [0, 1] as the Bernstein blend
    /// `sum C(3,i) (1-t)^(3-i) t^i P_i`.
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Point {
        let pts = self.control_points();
        let degree = pts.len() - 1;
        pts.iter()
            .enumerate()
            .fold(Point::ZERO, |acc, (i, p)| {
                let w = bernstein(degree, i, t);
                Point::new(w.mul_add(p.x, acc.x), w.mul_add(p.y, acc.y))
            })
    }

    /// Evaluate at `n` evenly spaced parameters covering [0, 1] inclusive.
    ///
    /// Counts below 2 are raised to 2, so the result always starts at `p0`
    /// and ends at `p3`.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<Point> {
        let n = n.max(2);
        let step = 1.0 / index_to_scalar(n - 1);
        (0..n)
            .map(|i| {
                // Pin the last sample so rounding cannot move the endpoint.
                let t = if i == n - 1 {
                    1.0
                } else {
                    step * index_to_scalar(i)
                };
                self.eval(t)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    fn arch() -> CubicSegment {
        CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        )
    }

    #[test]
    fn eval_endpoints() {
        let seg = arch();
        let p0 = seg.eval(0.0);
        assert!((p0.x).abs() < EPSILON);
        assert!((p0.y).abs() < EPSILON);
        let p1 = seg.eval(1.0);
        assert!((p1.x - 4.0).abs() < EPSILON);
        assert!((p1.y).abs() < EPSILON);
    }

    #[test]
    fn eval_midpoint_of_line() {
        // Straight line: all control points collinear
        let seg = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(10.0 / 3.0, 0.0),
            Point::new(20.0 / 3.0, 0.0),
            Point::new(10.0, 0.0),
        );
        let mid = seg.eval(0.5);
        assert!((mid.x - 5.0).abs() < EPSILON);
        assert!((mid.y).abs() < EPSILON);
    }

    #[test]
    fn eval_matches_kurbo() {
        use kurbo::{CubicBez, ParamCurve};
        let seg = arch();
        let reference = CubicBez::new(seg.p0, seg.p1, seg.p2, seg.p3);
        for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let ours = seg.eval(t);
            let theirs = reference.eval(t);
            assert!((ours - theirs).hypot() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn two_samples_are_the_endpoints() {
        // Control points must not influence a two-sample flattening.
        let wild = CubicSegment::new(
            Point::new(1.0, 1.0),
            Point::new(-50.0, 80.0),
            Point::new(90.0, -70.0),
            Point::new(2.0, 3.0),
        );
        let pts = wild.sample(2);
        assert_eq!(pts, vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0)]);
    }

    #[test]
    fn five_samples_hit_both_endpoints() {
        let seg = arch();
        let pts = seg.sample(5);
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - seg.p0).hypot() < EPSILON);
        assert!((pts[4] - seg.p3).hypot() < EPSILON);
        // Symmetric arch peaks at t = 0.5.
        assert!((pts[2].x - 2.0).abs() < EPSILON);
        assert!((pts[2].y - 1.5).abs() < EPSILON);
    }

    #[test]
    fn sample_count_is_clamped() {
        assert_eq!(arch().sample(0).len(), 2);
        assert_eq!(arch().sample(1).len(), 2);
    }

    #[test]
    fn quadratic_elevation_keeps_shape() {
        let q = CubicSegment::from_quadratic(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
        );
        // Quadratic midpoint: 0.25*P0 + 0.5*Q + 0.25*P2 = (1, 1)
        let mid = q.eval(0.5);
        assert!((mid.x - 1.0).abs() < EPSILON);
        assert!((mid.y - 1.0).abs() < EPSILON);
    }
}
