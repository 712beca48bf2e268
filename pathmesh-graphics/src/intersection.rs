//! Line-segment intersection.
//!
//! Uses the determinant form of the line-line intersection: the two
//! segments are extended to infinite lines, their crossing is computed, and
//! the crossing is accepted only if it lies within the bounds of both
//! segments.

use crate::types::{Point, Scalar};

/// Check whether `v` lies in the closed interval spanned by `a` and `b`.
fn in_bounds(a: Scalar, b: Scalar, v: Scalar) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

/// Intersection point of segments `a1-a2` and `b1-b2`.
///
/// Returns `None` for parallel (or degenerate) segments and for crossings
/// of the infinite lines that fall outside either segment.
#[must_use]
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let denom = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if denom == 0.0 {
        return None;
    }

    let op1 = a1.x * a2.y - a1.y * a2.x;
    let op2 = b1.x * b2.y - b1.y * b2.x;
    let x = (op1 * (b1.x - b2.x) - (a1.x - a2.x) * op2) / denom;
    let y = (op1 * (b1.y - b2.y) - (a1.y - a2.y) * op2) / denom;

    let inside = in_bounds(a1.x, a2.x, x)
        && in_bounds(b1.x, b2.x, x)
        && in_bounds(a1.y, a2.y, y)
        && in_bounds(b1.y, b2.y, y);
    inside.then(|| Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
