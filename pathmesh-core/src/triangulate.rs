//! Triangulation engine seam.
//!
//! An engine consumes the flat [`TriangulationInput`] arrays of a planar
//! straight-line graph and returns a triangle index list. [`Mesh`] maps
//! the result back into a flat vertex list.

use log::debug;
use pathmesh_graphics::polygon::contains_point;
use pathmesh_graphics::types::Point;
use serde::Serialize;

use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Flat engine input: `[x0, y0, x1, y1, ...]` points, `[from0, to0, ...]`
/// segments and `[x0, y0, ...]` hole seeds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangulationInput {
    pub points: Vec<f64>,
    pub segments: Vec<usize>,
    pub holes: Vec<f64>,
}

/// Flat engine output. `points` may contain points not present in the
/// input; `triangles` holds index triples into `points`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangulationOutput {
    pub points: Vec<f64>,
    pub triangles: Vec<usize>,
}

/// A constrained triangulator.
pub trait TriangulationEngine {
    /// Triangulate the region bounded by `input.segments`, leaving out
    /// every region that contains a hole seed.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::Triangulation`] error when the input is
    /// malformed or the engine fails.
    fn triangulate(&self, input: &TriangulationInput) -> PipelineResult<TriangulationOutput>;
}

// ---------------------------------------------------------------------------
// Earcut engine
// ---------------------------------------------------------------------------

/// Ear-clipping engine backed by `earcutr`.
///
/// Rings are recovered from the segment cycles. The first ring is the outer
/// boundary; a later ring is cut out only when a hole seed lies inside it,
/// otherwise it does not constrain the mesh. No points are inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarcutEngine;

fn failure(message: impl Into<String>) -> PipelineError {
    PipelineError::new(ErrorKind::Triangulation, message)
}

/// Split a flat segment list into rings of point indices. Each ring's
/// segments must be contiguous and chain head to tail back to its start.
fn segment_rings(segments: &[usize], n_points: usize) -> PipelineResult<Vec<Vec<usize>>> {
    if segments.len() % 2 != 0 {
        return Err(failure("segment list has odd length"));
    }
    let mut rings = Vec::new();
    let mut ring: Vec<usize> = Vec::new();
    let mut expected = None;
    for pair in segments.chunks_exact(2) {
        let (from, to) = (pair[0], pair[1]);
        if from >= n_points || to >= n_points {
            return Err(failure(format!("segment {from}-{to} out of range")));
        }
        if expected.is_some_and(|e| e != from) {
            return Err(failure(format!("segment {from}-{to} breaks its ring")));
        }
        ring.push(from);
        if ring.first() == Some(&to) {
            rings.push(std::mem::take(&mut ring));
            expected = None;
        } else {
            expected = Some(to);
        }
    }
    if !ring.is_empty() {
        return Err(failure("segments do not close their last ring"));
    }
    Ok(rings)
}

fn point_at(points: &[f64], i: usize) -> Point {
    Point::new(points[2 * i], points[2 * i + 1])
}

impl TriangulationEngine for EarcutEngine {
    fn triangulate(&self, input: &TriangulationInput) -> PipelineResult<TriangulationOutput> {
        if input.points.len() % 2 != 0 || input.holes.len() % 2 != 0 {
            return Err(failure("coordinate list has odd length"));
        }
        let rings = segment_rings(&input.segments, input.points.len() / 2)?;
        let Some((outer, inner)) = rings.split_first() else {
            return Ok(TriangulationOutput {
                points: input.points.clone(),
                triangles: Vec::new(),
            });
        };

        let seeds: Vec<Point> = input
            .holes
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        let ring_points = |ring: &[usize]| -> Vec<Point> {
            ring.iter().map(|&i| point_at(&input.points, i)).collect()
        };

        // Earcut vertex order -> input point index.
        let mut order: Vec<usize> = outer.clone();
        let mut hole_starts = Vec::new();
        for (k, ring) in inner.iter().enumerate() {
            let polygon = ring_points(ring);
            if seeds.iter().any(|s| contains_point(&polygon, *s)) {
                hole_starts.push(order.len());
                order.extend_from_slice(ring);
            } else {
                debug!("ring {} has no hole seed, meshing it as filled", k + 1);
            }
        }

        let coords: Vec<f64> = order
            .iter()
            .flat_map(|&i| [input.points[2 * i], input.points[2 * i + 1]])
            .collect();
        let local = earcutr::earcut(&coords, &hole_starts, 2)
            .map_err(|_| failure("earcut rejected the polygon"))?;
        debug!(
            "earcut: {} rings in, {} holes cut, {} triangles out",
            rings.len(),
            hole_starts.len(),
            local.len() / 3
        );

        Ok(TriangulationOutput {
            points: input.points.clone(),
            triangles: local.into_iter().map(|i| order[i]).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mesh
// ---------------------------------------------------------------------------

/// Triangle soup with one `[x, y, 0]` triple per triangle corner.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Mesh {
    pub vertices: Vec<f64>,
}

impl Mesh {
    /// Resolve the triangle indices of `output` into coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::Triangulation`] error when the triangle list
    /// is not a whole number of triples or refers to a missing point.
    pub fn from_output(output: &TriangulationOutput) -> PipelineResult<Self> {
        if output.triangles.len() % 3 != 0 {
            return Err(failure("triangle list is not a list of triples"));
        }
        let n_points = output.points.len() / 2;
        let mut vertices = Vec::with_capacity(output.triangles.len() * 3);
        for &i in &output.triangles {
            if i >= n_points {
                return Err(failure(format!("triangle refers to missing point {i}")));
            }
            vertices.extend([output.points[2 * i], output.points[2 * i + 1], 0.0]);
        }
        Ok(Self { vertices })
    }

    /// Number of triangles.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.vertices.len() / 9
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
