//! Unit-frame normalization.
//!
//! Translates and uniformly scales every coordinate so the path's bounding
//! box starts at the origin and its long side has length 1. The aspect
//! ratio is preserved: the result lies in `[0, 1] x [0, h]` (or
//! `[0, w] x [0, 1]`).

use log::debug;
use pathmesh_graphics::bbox::Aabb;

use crate::command::Command;
use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Map every coordinate field of `commands` into the unit frame of their
/// joint bounding box.
///
/// # Errors
///
/// Returns a [`ErrorKind::DegenerateRing`] error when the commands carry no
/// points, or when all points coincide.
pub fn normalize(commands: &[Command]) -> PipelineResult<Vec<Command>> {
    let bb = Aabb::from_points(commands.iter().flat_map(Command::coordinates)).ok_or_else(
        || PipelineError::new(ErrorKind::DegenerateRing, "path contains no points"),
    )?;
    if bb.long_side <= 0.0 || !bb.long_side.is_finite() {
        return Err(PipelineError::new(
            ErrorKind::DegenerateRing,
            format!("path has no usable extent (long side {})", bb.long_side),
        ));
    }

    debug!(
        "normalizing by min ({}, {}) long side {}",
        bb.min.x, bb.min.y, bb.long_side
    );
    Ok(commands
        .iter()
        .cloned()
        .map(|c| c.map_points(|p| bb.to_unit_frame(p)))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pathmesh_graphics::types::{EPSILON, Point};

    #[test]
    fn unit_frame_bounds() {
        let cmds = vec![
            Command::move_to(Point::new(10.0, -20.0)),
            Command::line_to(Point::new(50.0, -20.0)),
            Command::line_to(Point::new(50.0, -40.0)),
            Command::ClosePath,
        ];
        let out = normalize(&cmds).unwrap();
        let bb = Aabb::from_points(out.iter().flat_map(Command::coordinates)).unwrap();
        assert!((bb.long_side - 1.0).abs() < EPSILON);
        assert!(bb.min.x.abs() < EPSILON && bb.min.y.abs() < EPSILON);
        assert!((bb.size.y - 0.5).abs() < EPSILON);
        assert_eq!(out[3], Command::ClosePath);
    }

    #[test]
    fn control_points_are_included() {
        let cmds = vec![
            Command::move_to(Point::new(0.0, 0.0)),
            Command::curve_to(
                Point::new(0.0, 4.0),
                Point::new(2.0, 4.0),
                Point::new(2.0, 0.0),
            ),
        ];
        let out = normalize(&cmds).unwrap();
        // The long side is the control hull height (4), not the chord (2).
        assert_eq!(out[1].dest(), Some(Point::new(0.5, 0.0)));
    }

    #[test]
    fn empty_input_is_degenerate() {
        let err = normalize(&[Command::ClosePath]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DegenerateRing);
    }

    #[test]
    fn single_point_is_degenerate() {
        let err = normalize(&[
            Command::move_to(Point::new(3.0, 3.0)),
            Command::line_to(Point::new(3.0, 3.0)),
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DegenerateRing);
    }
}
