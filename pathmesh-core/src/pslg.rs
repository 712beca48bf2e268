//! Planar straight-line graph built from extracted regions.
//!
//! All rings are flattened into one indexed point list, outer boundary
//! first. Each ring contributes one segment per edge, closing edge
//! included. Hole seeds follow in ring order.

use std::fmt;

use log::debug;
use pathmesh_graphics::types::Point;

use crate::subpath::Regions;
use crate::triangulate::TriangulationInput;

/// Points, boundary segments and hole seeds of a meshable region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pslg {
    pub points: Vec<Point>,
    /// Index pairs into `points`.
    pub segments: Vec<[usize; 2]>,
    pub holes: Vec<Point>,
}

impl Pslg {
    /// Flatten `regions` into a graph.
    #[must_use]
    pub fn from_regions(regions: &Regions) -> Self {
        let mut pslg = Self {
            holes: regions.hole_seeds.clone(),
            ..Self::default()
        };
        for ring in &regions.rings {
            let start = pslg.points.len();
            let n = ring.len();
            pslg.points.extend_from_slice(ring);
            pslg.segments
                .extend((0..n).map(|i| [start + i, start + (i + 1) % n]));
        }
        debug!(
            "built graph: {} points, {} segments, {} holes",
            pslg.points.len(),
            pslg.segments.len(),
            pslg.holes.len()
        );
        pslg
    }

    /// Flat arrays in the shape a triangulation engine consumes.
    #[must_use]
    pub fn to_triangulation_input(&self) -> TriangulationInput {
        TriangulationInput {
            points: self.points.iter().flat_map(|p| [p.x, p.y]).collect(),
            segments: self.segments.iter().flatten().copied().collect(),
            holes: self.holes.iter().flat_map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Display adapter writing the graph in the `.poly` text format.
    #[must_use]
    pub const fn poly(&self) -> PolyFile<'_> {
        PolyFile(self)
    }
}

/// `.poly` rendering of a [`Pslg`]:
///
/// ```text
/// <n_points> 2 0 0
/// <index> <x> <y>          (one per point)
/// <n_segments> 0
/// <index> <from> <to>      (one per segment)
/// <n_holes>
/// <index> <x> <y>          (one per hole)
/// ```
pub struct PolyFile<'a>(&'a Pslg);

impl fmt::Display for PolyFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pslg = self.0;
        writeln!(f, "{} 2 0 0", pslg.points.len())?;
        for (i, p) in pslg.points.iter().enumerate() {
            writeln!(f, "{i} {} {}", p.x, p.y)?;
        }
        writeln!(f, "{} 0", pslg.segments.len())?;
        for (i, [from, to]) in pslg.segments.iter().enumerate() {
            writeln!(f, "{i} {from} {to}")?;
        }
        writeln!(f, "{}", pslg.holes.len())?;
        for (i, h) in pslg.holes.iter().enumerate() {
            writeln!(f, "{i} {} {}", h.x, h.y)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
