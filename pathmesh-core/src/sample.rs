//! Curve flattening.
//!
//! Replaces each cubic `curveto` with straight `lineto`s through evenly
//! spaced samples of the curve, then flips the vertical axis from the
//! document's Y-down convention to Y-up.

use log::debug;
use pathmesh_graphics::bezier::CubicSegment;
use pathmesh_graphics::types::Point;

use crate::command::{Command, Positioning};

/// Flatten curves into `segments_per_curve - 1` line segments each and
/// negate the Y coordinate of every point.
///
/// Elliptical arcs are not evaluated; each becomes a straight chord to its
/// endpoint.
///
/// The input must be absolute (see [`crate::absolute::absolutize`]).
#[must_use]
pub fn sample_curves(commands: &[Command], segments_per_curve: usize) -> Vec<Command> {
    debug_assert!(
        commands
            .iter()
            .all(|c| c.positioning() != Some(Positioning::Relative)),
        "curve sampling needs absolute commands"
    );

    let mut out = Vec::with_capacity(commands.len());
    let mut pos = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut curves = 0usize;

    for cmd in commands {
        match *cmd {
            Command::CurveTo {
                control_begin,
                control_end,
                dest,
                ..
            } => {
                let seg = CubicSegment::new(pos, control_begin, control_end, dest);
                // The first sample repeats the current point.
                out.extend(
                    seg.sample(segments_per_curve)
                        .into_iter()
                        .skip(1)
                        .map(Command::line_to),
                );
                curves += 1;
            }
            Command::EllipticalArc { dest, .. } => {
                debug!("arc to {dest:?} flattened to a chord");
                out.push(Command::line_to(dest));
            }
            Command::ClosePath => {
                pos = subpath_start;
                out.push(Command::ClosePath);
                continue;
            }
            _ => out.push(cmd.clone()),
        }
        if let Some(dest) = cmd.dest() {
            pos = dest;
        }
        if matches!(cmd, Command::MoveTo { .. }) {
            subpath_start = pos;
        }
    }

    debug!(
        "sampled {curves} curves, {} commands out",
        out.len()
    );
    out.into_iter()
        .map(|c| c.map_points(|p| Point::new(p.x, -p.y)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandKind;
    use pathmesh_graphics::types::EPSILON;

    fn curve_path() -> Vec<Command> {
        vec![
            Command::move_to(Point::new(0.0, 0.0)),
            Command::curve_to(
                Point::new(1.0, 2.0),
                Point::new(3.0, 2.0),
                Point::new(4.0, 0.0),
            ),
            Command::ClosePath,
        ]
    }

    fn dests(cmds: &[Command]) -> Vec<Point> {
        cmds.iter().filter_map(Command::dest).collect()
    }

    #[test]
    fn two_samples_keep_only_the_endpoint() {
        let out = sample_curves(&curve_path(), 2);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], Command::line_to(Point::new(4.0, 0.0)));
    }

    #[test]
    fn five_samples_make_four_lines() {
        let out = sample_curves(&curve_path(), 5);
        let kinds: Vec<_> = out.iter().map(Command::kind).collect();
        assert_eq!(
            kinds,
            vec![
                CommandKind::MoveTo,
                CommandKind::LineTo,
                CommandKind::LineTo,
                CommandKind::LineTo,
                CommandKind::LineTo,
                CommandKind::ClosePath,
            ]
        );
        let pts = dests(&out);
        assert!((pts[4] - Point::new(4.0, 0.0)).hypot() < EPSILON);
        // Midpoint sample of the arch, flipped.
        assert!((pts[2] - Point::new(2.0, -1.5)).hypot() < EPSILON);
    }

    #[test]
    fn y_axis_is_flipped() {
        let out = sample_curves(
            &[
                Command::move_to(Point::new(1.0, 2.0)),
                Command::line_to(Point::new(3.0, -4.0)),
            ],
            5,
        );
        assert_eq!(
            dests(&out),
            vec![Point::new(1.0, -2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn curve_after_close_starts_at_subpath_start() {
        let cmds = vec![
            Command::move_to(Point::new(0.0, 0.0)),
            Command::line_to(Point::new(10.0, 0.0)),
            Command::ClosePath,
            Command::curve_to(
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
            ),
        ];
        let out = sample_curves(&cmds, 3);
        // Straight curve from (0, 0): the middle sample sits on the y axis.
        let mid = out[3].dest().unwrap();
        assert!(mid.x.abs() < EPSILON, "mid = {mid:?}");
    }

    #[test]
    fn arcs_become_chords() {
        let cmds = vec![
            Command::move_to(Point::new(0.0, 0.0)),
            Command::EllipticalArc {
                positioning: Positioning::Absolute,
                shape: crate::command::ArcShape {
                    radii: pathmesh_graphics::types::Vec2::new(1.0, 1.0),
                    rotation: 0.0,
                    large_arc: false,
                    sweep: true,
                },
                dest: Point::new(2.0, 0.0),
            },
        ];
        let out = sample_curves(&cmds, 5);
        assert_eq!(out[1], Command::line_to(Point::new(2.0, 0.0)));
    }
}
