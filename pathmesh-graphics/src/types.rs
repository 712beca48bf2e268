//! Core types shared across the `pathmesh` crates.

pub use kurbo::{Point, Vec2};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Coordinate scalar. Path data is parsed as `f32` but every stage after
/// parsing works in `f64`.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

/// Convert a `usize` index to a `Scalar`.
#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "indices and sample counts are far below 2^52"
)]
pub const fn index_to_scalar(i: usize) -> Scalar {
    i as Scalar
}

/// Approximate point equality within [`EPSILON`] on each axis.
#[inline]
#[must_use]
pub fn points_close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
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

    #[test]
    fn index_conversion() {
        assert_eq!(index_to_scalar(0), 0.0);
        assert_eq!(index_to_scalar(42), 42.0);
    }

    #[test]
    fn close_points() {
        assert!(points_close(Point::new(1.0, 2.0), Point::new(1.0, 2.0)));
        assert!(points_close(
            Point::new(1.0, 2.0),
            Point::new(1.0 + EPSILON / 2.0, 2.0)
        ));
        assert!(!points_close(Point::new(1.0, 2.0), Point::new(1.0, 2.1)));
    }
}
