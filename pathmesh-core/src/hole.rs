//! Interior seed points for hole rings.
//!
//! A hole is marked for the triangulator by any point strictly inside its
//! ring. Two searches are available:
//!
//! * [`HoleStrategy::Random`] casts a ray from a random point outside the
//!   ring's bounding box towards the midpoint of a random edge, and takes
//!   the midpoint of the first two boundary crossings.
//! * [`HoleStrategy::Scanline`] cuts the bounding box with horizontal lines
//!   at 1/2, 1/4, 3/4, 1/8, ... of its height and takes the middle of the
//!   first span between crossings that lies inside.
//!
//! A candidate is accepted only when it is inside its own ring and outside
//! every other hole ring by the even-odd rule. A seed that fell inside a
//! nested island would cut the island out of the mesh as well.

use log::{debug, warn};
use pathmesh_graphics::bbox::Aabb;
use pathmesh_graphics::intersection::segment_intersection;
use pathmesh_graphics::polygon::{contains_point, edges};
use pathmesh_graphics::types::{Point, Scalar, Vec2, index_to_scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ErrorKind, PipelineError, PipelineResult};
use crate::options::{HoleOptions, HoleStrategy, MissingHolePolicy};

/// Inside `ring` and outside each of `others`.
fn is_hole_interior(ring: &[Point], others: &[&[Point]], p: Point) -> bool {
    contains_point(ring, p) && !others.iter().any(|other| contains_point(other, p))
}

// ---------------------------------------------------------------------------
// Random rays
// ---------------------------------------------------------------------------

/// One random ray. Returns `None` when the ray has to be discarded.
fn cast_ray<R: Rng>(
    ring: &[Point],
    others: &[&[Point]],
    bbox: &Aabb,
    options: &HoleOptions,
    rng: &mut R,
) -> Option<Point> {
    let jitter = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
    let origin = bbox.point_outside(options.margin, jitter);

    let i = rng.gen_range(0..ring.len());
    let target = ring[i].midpoint(ring[(i + 1) % ring.len()]);

    let mut crossings: Vec<Point> = edges(ring)
        .filter_map(|(a, b)| segment_intersection(origin, target, a, b))
        .collect();

    let grazes_vertex = crossings
        .iter()
        .any(|c| ring.iter().any(|v| v.distance(*c) < options.vertex_epsilon));
    if grazes_vertex || crossings.len() < 2 {
        return None;
    }

    crossings.sort_by(|a, b| origin.distance(*a).total_cmp(&origin.distance(*b)));
    let seed = crossings[0].midpoint(crossings[1]);
    is_hole_interior(ring, others, seed).then_some(seed)
}

/// Find a point inside `ring` and outside `others` by casting random rays.
///
/// # Errors
///
/// Returns a [`ErrorKind::HoleNotFound`] error when `options.max_attempts`
/// rays all fail.
pub fn random_hole_seed<R: Rng>(
    ring: &[Point],
    others: &[&[Point]],
    options: &HoleOptions,
    rng: &mut R,
) -> PipelineResult<Point> {
    let bbox = ring_bbox(ring)?;
    for attempt in 0..options.max_attempts {
        if let Some(seed) = cast_ray(ring, others, &bbox, options, rng) {
            debug!("hole seed {seed:?} after {} rays", attempt + 1);
            return Ok(seed);
        }
    }
    Err(not_found(options.max_attempts))
}

// ---------------------------------------------------------------------------
// Scanline
// ---------------------------------------------------------------------------

/// Fractions 1/2, 1/4, 3/4, 1/8, 3/8, ... of the unit interval.
fn bisection_fractions() -> impl Iterator<Item = Scalar> {
    (1..usize::BITS).flat_map(|depth| {
        let denom = 1_usize << depth;
        (1..denom)
            .step_by(2)
            .map(move |num| index_to_scalar(num) / index_to_scalar(denom))
    })
}

/// Middle of the first span along the line at height `y` that lies inside
/// `ring` and outside `others`.
///
/// Spans run between consecutive crossings with any of the rings. The line
/// is discarded when it passes within `vertex_epsilon` of a vertex; spans
/// narrower than `vertex_epsilon` are skipped.
fn scanline_candidate(
    ring: &[Point],
    others: &[&[Point]],
    y: Scalar,
    vertex_epsilon: Scalar,
) -> Option<Point> {
    let rings = || std::iter::once(ring).chain(others.iter().copied());
    let mut xs: Vec<Scalar> = rings()
        .flat_map(edges)
        .filter(|(a, b)| (a.y > y) != (b.y > y))
        .map(|(a, b)| (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x)
        .collect();
    let grazes_vertex = xs.iter().any(|x| {
        rings()
            .flatten()
            .any(|v| v.distance(Point::new(*x, y)) < vertex_epsilon)
    });
    if grazes_vertex {
        return None;
    }
    xs.sort_by(Scalar::total_cmp);

    xs.windows(2)
        .filter(|span| span[1] - span[0] > vertex_epsilon)
        .map(|span| Point::new(span[0].midpoint(span[1]), y))
        .find(|p| is_hole_interior(ring, others, *p))
}

/// Find a point inside `ring` and outside `others` with deterministic
/// horizontal scanlines.
///
/// # Errors
///
/// Returns a [`ErrorKind::HoleNotFound`] error when none of the first
/// `options.max_attempts` scanlines crosses the hole's interior.
pub fn scanline_hole_seed(
    ring: &[Point],
    others: &[&[Point]],
    options: &HoleOptions,
) -> PipelineResult<Point> {
    let bbox = ring_bbox(ring)?;
    bisection_fractions()
        .take(options.max_attempts)
        .find_map(|f| {
            let y = bbox.size.y.mul_add(f, bbox.min.y);
            scanline_candidate(ring, others, y, options.vertex_epsilon)
        })
        .ok_or_else(|| not_found(options.max_attempts))
}

// ---------------------------------------------------------------------------
// All holes
// ---------------------------------------------------------------------------

/// Compute one seed per hole ring.
///
/// Each seed lies inside its ring and outside every other hole ring, so a
/// ring whose whole interior is covered by other holes (an island inside a
/// hole) has no seed. The random generator is seeded once from `options.seed`, so the same
/// rings and options always give the same seeds. Under
/// [`MissingHolePolicy::Omit`] a ring whose search fails is logged and
/// skipped.
///
/// # Errors
///
/// Under [`MissingHolePolicy::Abort`], the first failed search is returned
/// with the ring's index in its message.
pub fn find_hole_seeds(
    holes: &[Vec<Point>],
    options: &HoleOptions,
    policy: MissingHolePolicy,
) -> PipelineResult<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut seeds = Vec::with_capacity(holes.len());

    for (i, ring) in holes.iter().enumerate() {
        let others: Vec<&[Point]> = holes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| other.as_slice())
            .collect();
        let found = match options.strategy {
            HoleStrategy::Random => random_hole_seed(ring, &others, options, &mut rng),
            HoleStrategy::Scanline => scanline_hole_seed(ring, &others, options),
        };
        match (found, policy) {
            (Ok(seed), _) => seeds.push(seed),
            (Err(e), MissingHolePolicy::Abort) => {
                return Err(PipelineError::new(e.kind, format!("hole {i}: {}", e.message)));
            }
            (Err(e), MissingHolePolicy::Omit) => warn!("omitting hole {i}: {}", e.message),
        }
    }
    Ok(seeds)
}

fn ring_bbox(ring: &[Point]) -> PipelineResult<Aabb> {
    Aabb::from_points(ring.iter().copied())
        .filter(|_| ring.len() >= 3)
        .ok_or_else(|| PipelineError::new(ErrorKind::DegenerateRing, "hole ring has fewer than 3 points"))
}

fn not_found(attempts: usize) -> PipelineError {
    PipelineError::new(
        ErrorKind::HoleNotFound,
        format!("no interior point found after {attempts} attempts"),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
