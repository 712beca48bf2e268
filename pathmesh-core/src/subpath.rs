//! Sub-path and hole extraction.
//!
//! Splits a flattened command list at `closepath` markers into closed
//! rings. The first ring is the outer boundary; every later ring is a hole
//! and gets one interior seed point.

use log::{debug, warn};
use pathmesh_graphics::polygon::dedup_closing_point;
use pathmesh_graphics::types::Point;

use crate::command::Command;
use crate::error::{ErrorKind, PipelineError, PipelineResult};
use crate::hole::find_hole_seeds;
use crate::options::PipelineOptions;

/// Closed rings of a path plus one seed point per hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions {
    /// Outer boundary first, then holes in path order. No ring repeats its
    /// first point at the end.
    pub rings: Vec<Vec<Point>>,
    /// Interior points of the hole rings, in ring order. Shorter than the
    /// hole count only when holes were omitted by policy.
    pub hole_seeds: Vec<Point>,
}

impl Regions {
    /// The outer boundary ring.
    #[must_use]
    pub fn outer(&self) -> &[Point] {
        self.rings.first().map_or(&[], Vec::as_slice)
    }

    /// The hole rings.
    #[must_use]
    pub fn holes(&self) -> &[Vec<Point>] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

/// Split `commands` into closed rings.
///
/// Each ring takes the destinations of the commands before a `closepath`;
/// commands after the last `closepath` do not form a ring and are dropped.
///
/// # Errors
///
/// Returns a [`ErrorKind::DegenerateRing`] error for a `closepath` with no
/// points before it, for a ring with fewer than 3 distinct points, and for
/// a path without any closed ring.
pub fn extract_rings(commands: &[Command]) -> PipelineResult<Vec<Vec<Point>>> {
    let mut rings = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (i, cmd) in commands.iter().enumerate() {
        if !matches!(cmd, Command::ClosePath) {
            current.extend(cmd.dest());
            continue;
        }
        if current.is_empty() {
            return Err(PipelineError::new(
                ErrorKind::DegenerateRing,
                format!("closepath at command {i} closes an empty sub-path"),
            ));
        }
        let mut ring = std::mem::take(&mut current);
        dedup_closing_point(&mut ring);
        if ring.len() < 3 {
            return Err(PipelineError::new(
                ErrorKind::DegenerateRing,
                format!("ring {} has only {} points", rings.len(), ring.len()),
            ));
        }
        rings.push(ring);
    }

    if !current.is_empty() {
        warn!("dropping {} points after the last closepath", current.len());
    }
    if rings.is_empty() {
        return Err(PipelineError::new(
            ErrorKind::DegenerateRing,
            "path has no closed sub-path",
        ));
    }
    debug!("extracted {} rings", rings.len());
    Ok(rings)
}

/// Extract rings and compute one seed point per hole.
///
/// # Errors
///
/// Propagates errors from [`extract_rings`] and from the hole-seed search.
pub fn extract_regions(commands: &[Command], options: &PipelineOptions) -> PipelineResult<Regions> {
    let rings = extract_rings(commands)?;
    let hole_seeds = find_hole_seeds(
        rings.get(1..).unwrap_or(&[]),
        &options.hole,
        options.missing_hole,
    )?;
    Ok(Regions { rings, hole_seeds })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
