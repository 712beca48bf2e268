//! Axis-aligned bounding box computation.
//!
//! An [`Aabb`] is derived from a point set and never mutated afterwards;
//! callers recompute it whenever the point set changes.

use crate::types::{Point, Scalar, Vec2};

// ---------------------------------------------------------------------------
// Aabb type
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box of a non-empty point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
    /// `max - min` on each axis.
    pub size: Vec2,
    /// The larger of the two side lengths.
    pub long_side: Scalar,
}

impl Aabb {
    /// Build from two corners. `min` must not exceed `max` on either axis.
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        let size = max - min;
        Self {
            min,
            max,
            size,
            long_side: size.x.max(size.y),
        }
    }

    /// Bounding box of `points`, or `None` for an empty set.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self::new(min, max))
    }

    /// Map `p` into the unit frame of this box: translate by `-min`, then
    /// scale uniformly by `1 / long_side`.
    ///
    /// The caller must ensure `long_side` is non-zero.
    #[must_use]
    pub fn to_unit_frame(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.min.x) / self.long_side,
            (p.y - self.min.y) / self.long_side,
        )
    }

    /// A point outside the box by up to `margin` times its size per axis.
    ///
    /// `jitter` holds one value in `[-1, 1]` per axis. Its sign picks the
    /// side (positive = beyond `max`, otherwise below `min`) and its
    /// magnitude scales the offset.
    #[must_use]
    pub fn point_outside(&self, margin: Scalar, jitter: Vec2) -> Point {
        let offset = |size: Scalar, j: Scalar, lo: Scalar, hi: Scalar| {
            let n = size * margin * j;
            if n > 0.0 { hi + n } else { lo + n }
        };
        Point::new(
            offset(self.size.x, jitter.x, self.min.x, self.max.x),
            offset(self.size.y, jitter.y, self.min.y, self.max.y),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact float comparisons are intentional in tests"
)]
mod tests {
    use super::*;
    use crate::types::EPSILON;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn empty_set_has_no_box() {
        assert!(Aabb::from_points(Vec::new()).is_none());
    }

    #[test]
    fn from_points_extents() {
        let bb = Aabb::from_points([
            Point::new(1.0, 2.0),
            Point::new(5.0, 8.0),
            Point::new(3.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bb.min, Point::new(1.0, -1.0));
        assert_eq!(bb.max, Point::new(5.0, 8.0));
        assert_eq!(bb.size, Vec2::new(4.0, 9.0));
        assert_eq!(bb.long_side, 9.0);
    }

    #[test]
    fn single_point_is_degenerate() {
        let bb = Aabb::from_points([Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(bb.long_side, 0.0);
        assert_eq!(bb.min, bb.max);
    }

    #[test]
    fn unit_frame_preserves_aspect_ratio() {
        let bb = Aabb::from_points([Point::new(10.0, 20.0), Point::new(30.0, 30.0)]).unwrap();
        let p = bb.to_unit_frame(Point::new(30.0, 30.0));
        assert!((p.x - 1.0).abs() < EPSILON);
        assert!((p.y - 0.5).abs() < EPSILON);
        let origin = bb.to_unit_frame(bb.min);
        assert!(origin.x.abs() < EPSILON && origin.y.abs() < EPSILON);
    }

    #[test]
    fn point_outside_respects_side() {
        let bb = Aabb::from_points(square()).unwrap();
        let p = bb.point_outside(0.2, Vec2::new(1.0, -1.0));
        assert!((p.x - 12.0).abs() < EPSILON, "x = {}", p.x);
        assert!((p.y + 2.0).abs() < EPSILON, "y = {}", p.y);
    }

    #[test]
    fn point_outside_stays_within_margin() {
        let bb = Aabb::from_points(square()).unwrap();
        for j in [-0.9, -0.5, -0.1, 0.1, 0.5, 0.9] {
            let p = bb.point_outside(0.2, Vec2::new(j, j));
            assert!(p.x < bb.min.x || p.x > bb.max.x, "jitter {j} gave inside x {p:?}");
            assert!(p.y < bb.min.y || p.y > bb.max.y, "jitter {j} gave inside y {p:?}");
            assert!(p.x >= -2.0 && p.x <= 12.0);
            assert!(p.y >= -2.0 && p.y <= 12.0);
        }
    }
}
