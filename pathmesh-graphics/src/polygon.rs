//! Predicates on closed rings.
//!
//! A ring is a slice of points with an implicit closing edge from the last
//! point back to the first.

use crate::types::{Point, points_close};

/// Iterate over the edges of a ring, including the closing edge.
pub fn edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Even-odd point-in-polygon test.
///
/// Points exactly on the boundary may be reported either way.
#[must_use]
pub fn contains_point(ring: &[Point], p: Point) -> bool {
    edges(ring).fold(false, |inside, (a, b)| {
        let crosses = (a.y > p.y) != (b.y > p.y)
            && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
        inside ^ crosses
    })
}

/// Drop a trailing point that repeats the first one.
pub fn dedup_closing_point(ring: &mut Vec<Point>) {
    if ring.len() > 1 && ring.first().zip(ring.last()).is_some_and(|(a, b)| points_close(*a, *b)) {
        ring.pop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
