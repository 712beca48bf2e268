//! Absolute positioning.
//!
//! Walks the atomic command list keeping track of the current position and
//! rewrites every command with absolute coordinates. Shorthand commands are
//! resolved on the way, since they need the current position:
//! horizontal/vertical lines become `lineto`, and smooth or quadratic curves
//! become full cubic `curveto`s.

use log::debug;
use pathmesh_graphics::bezier::CubicSegment;
use pathmesh_graphics::types::{Point, Vec2};

use crate::command::{Command, Positioning};

/// Current-point bookkeeping while walking a command list.
#[derive(Debug, Default)]
struct Cursor {
    pos: Point,
    /// Destination of the most recent `moveto`.
    subpath_start: Point,
    /// Second control point of the previous command, if it was a cubic.
    cubic_control: Option<Point>,
    /// Control point of the previous command, if it was a quadratic.
    quad_control: Option<Point>,
}

/// Reflect `control` through `about`.
fn reflect(control: Point, about: Point) -> Point {
    about + (about - control)
}

/// Rewrite `commands` so every coordinate is absolute.
///
/// With `ignore_first_moveto`, the first command, when it is an absolute
/// `moveto`, keeps the current position (the origin) as its destination
/// instead of moving there.
///
/// `closepath` moves the current position back to the start of the
/// sub-path.
#[must_use]
pub fn absolutize(commands: &[Command], ignore_first_moveto: bool) -> Vec<Command> {
    let mut cursor = Cursor::default();
    let mut out = Vec::with_capacity(commands.len());
    let mut relative = 0usize;

    for (i, cmd) in commands.iter().enumerate() {
        let is_relative = cmd.positioning() == Some(Positioning::Relative);
        relative += usize::from(is_relative);
        let offset = if is_relative {
            cursor.pos.to_vec2()
        } else {
            Vec2::ZERO
        };
        let pos = cursor.pos;

        let (resolved, cubic_control, quad_control) = match *cmd {
            Command::ClosePath => {
                cursor.pos = cursor.subpath_start;
                cursor.cubic_control = None;
                cursor.quad_control = None;
                out.push(Command::ClosePath);
                continue;
            }
            Command::MoveTo {
                positioning: Positioning::Absolute,
                ..
            } if i == 0 && ignore_first_moveto => (Command::move_to(pos), None, None),
            Command::MoveTo { dest, .. } => (Command::move_to(dest + offset), None, None),
            Command::LineTo { dest, .. } => (Command::line_to(dest + offset), None, None),
            Command::HorizontalLineTo { x, .. } => (
                Command::line_to(Point::new(x + offset.x, pos.y)),
                None,
                None,
            ),
            Command::VerticalLineTo { y, .. } => (
                Command::line_to(Point::new(pos.x, y + offset.y)),
                None,
                None,
            ),
            Command::CurveTo {
                control_begin,
                control_end,
                dest,
                ..
            } => {
                let end = control_end + offset;
                (
                    Command::curve_to(control_begin + offset, end, dest + offset),
                    Some(end),
                    None,
                )
            }
            Command::SmoothCurveTo {
                control_end, dest, ..
            } => {
                let begin = cursor
                    .cubic_control
                    .map_or(pos, |c| reflect(c, pos));
                let end = control_end + offset;
                (Command::curve_to(begin, end, dest + offset), Some(end), None)
            }
            Command::QuadraticCurveTo { control, dest, .. } => {
                let q = control + offset;
                let seg = CubicSegment::from_quadratic(pos, q, dest + offset);
                (Command::curve_to(seg.p1, seg.p2, seg.p3), None, Some(q))
            }
            Command::SmoothQuadraticCurveTo { dest, .. } => {
                let q = cursor.quad_control.map_or(pos, |c| reflect(c, pos));
                let seg = CubicSegment::from_quadratic(pos, q, dest + offset);
                (Command::curve_to(seg.p1, seg.p2, seg.p3), None, Some(q))
            }
            Command::EllipticalArc { shape, dest, .. } => (
                Command::EllipticalArc {
                    positioning: Positioning::Absolute,
                    shape,
                    dest: dest + offset,
                },
                None,
                None,
            ),
        };

        if let Some(dest) = resolved.dest() {
            cursor.pos = dest;
        }
        if matches!(resolved, Command::MoveTo { .. }) {
            cursor.subpath_start = cursor.pos;
        }
        cursor.cubic_control = cubic_control;
        cursor.quad_control = quad_control;
        out.push(resolved);
    }

    debug!(
        "absolutized {} commands ({relative} relative)",
        commands.len()
    );
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use crate::parser::parse_path;
    use pathmesh_graphics::types::EPSILON;

    fn commands(d: &str) -> Vec<Command> {
        expand(&parse_path(d).unwrap()).unwrap()
    }

    fn dests(cmds: &[Command]) -> Vec<Point> {
        cmds.iter().filter_map(Command::dest).collect()
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).hypot() < EPSILON, "{a:?} != {b:?}");
    }

    #[test]
    fn absolute_sequence_is_unchanged() {
        let cmds = commands("M0,0 L10,0 C12,2 12,8 10,10 L0,10 Z");
        assert_eq!(absolutize(&cmds, false), cmds);
    }

    #[test]
    fn relative_square_is_resolved() {
        let abs = absolutize(&commands("m0,0 l10,0 l0,10 l-10,0 z"), false);
        assert_eq!(
            dests(&abs),
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
        assert!(
            abs.iter()
                .all(|c| c.positioning().is_none_or(|p| p == Positioning::Absolute))
        );
    }

    #[test]
    fn second_pass_is_idempotent() {
        let once = absolutize(&commands("m5,5 l10,0 c1,1 2,2 3,3 l0,10 z m2,2 l1,0 l0,1 z"), false);
        let twice = absolutize(&once, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn relative_curve_moves_every_control() {
        let abs = absolutize(&commands("M10,10 c1,2 3,4 5,6"), false);
        assert_eq!(
            abs[1],
            Command::curve_to(
                Point::new(11.0, 12.0),
                Point::new(13.0, 14.0),
                Point::new(15.0, 16.0)
            )
        );
    }

    #[test]
    fn ignore_first_moveto_pins_origin() {
        let abs = absolutize(&commands("M5,5 L10,5 l0,5"), true);
        assert_eq!(
            dests(&abs),
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(10.0, 10.0)
            ]
        );
    }

    #[test]
    fn closepath_returns_to_subpath_start() {
        let abs = absolutize(&commands("M10,10 l5,0 l0,5 z m1,1 l1,0"), false);
        let pts = dests(&abs);
        assert_eq!(pts[3], Point::new(11.0, 11.0));
        assert_eq!(pts[4], Point::new(12.0, 11.0));
    }

    #[test]
    fn axis_lines_use_current_position() {
        let abs = absolutize(&commands("M1,2 H5 v3 h-2 V0"), false);
        assert_eq!(
            dests(&abs),
            vec![
                Point::new(1.0, 2.0),
                Point::new(5.0, 2.0),
                Point::new(5.0, 5.0),
                Point::new(3.0, 5.0),
                Point::new(3.0, 0.0),
            ]
        );
    }

    #[test]
    fn smooth_curve_reflects_previous_control() {
        let abs = absolutize(&commands("M0,0 C0,1 1,1 1,0 S2,-1 2,0"), false);
        let Command::CurveTo { control_begin, .. } = abs[2] else {
            panic!("expected a curve, got {:?}", abs[2]);
        };
        assert_close(control_begin, Point::new(1.0, -1.0));
    }

    #[test]
    fn smooth_curve_without_previous_cubic_starts_at_current_point() {
        let abs = absolutize(&commands("M3,3 S4,4 5,3"), false);
        let Command::CurveTo { control_begin, .. } = abs[1] else {
            panic!("expected a curve, got {:?}", abs[1]);
        };
        assert_close(control_begin, Point::new(3.0, 3.0));
    }

    #[test]
    fn quadratics_are_elevated() {
        let abs = absolutize(&commands("M0,0 Q1,2 2,0 T4,0"), false);
        let Command::CurveTo {
            control_begin,
            control_end,
            dest,
            ..
        } = abs[1]
        else {
            panic!("expected a curve, got {:?}", abs[1]);
        };
        assert_close(control_begin, Point::new(2.0 / 3.0, 4.0 / 3.0));
        assert_close(control_end, Point::new(4.0 / 3.0, 4.0 / 3.0));
        assert_close(dest, Point::new(2.0, 0.0));

        // T reflects (1, 2) through (2, 0) to (3, -2).
        let Command::CurveTo { control_begin, .. } = abs[2] else {
            panic!("expected a curve, got {:?}", abs[2]);
        };
        assert_close(control_begin, Point::new(2.0, 0.0).lerp(Point::new(3.0, -2.0), 2.0 / 3.0));
    }

    #[test]
    fn relative_arc_endpoint_is_resolved() {
        let abs = absolutize(&commands("M1,1 a2,2 0 0 1 4,0"), false);
        assert_eq!(abs[1].dest(), Some(Point::new(5.0, 1.0)));
        assert_eq!(abs[1].positioning(), Some(Positioning::Absolute));
    }
}
