//! Command expansion.
//!
//! Turns compact opcode/argument tuples into atomic single-segment
//! commands. A tuple with more arguments than one segment needs is split
//! into fixed-size groups, each becoming an implicit repetition of the same
//! opcode. Extra coordinate pairs after a `moveto` become `lineto`s with
//! the same positioning.

use log::debug;
use pathmesh_graphics::types::{Point, Scalar, Vec2};

use crate::command::{ArcShape, Command, CommandKind, Positioning, RawCommand};
use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Expand every raw tuple into atomic commands.
///
/// The first tuple, if it is a `moveto`, is always absolute regardless of
/// its letter case.
///
/// # Errors
///
/// Returns a [`ErrorKind::Parse`] error for an unknown opcode letter or an
/// argument count that does not fit the opcode.
pub fn expand(raw: &[RawCommand]) -> PipelineResult<Vec<Command>> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, tuple) in raw.iter().enumerate() {
        expand_one(tuple, i == 0, &mut out)?;
    }
    debug!("expanded {} raw commands into {}", raw.len(), out.len());
    Ok(out)
}

fn expand_one(tuple: &RawCommand, first: bool, out: &mut Vec<Command>) -> PipelineResult<()> {
    let kind = CommandKind::from_letter(tuple.opcode).ok_or_else(|| {
        PipelineError::new(
            ErrorKind::Parse,
            format!("unknown opcode '{}'", tuple.opcode),
        )
    })?;
    let positioning = Positioning::from_letter(tuple.opcode);
    let arity = kind.arity();

    if arity == 0 {
        if !tuple.args.is_empty() {
            return Err(PipelineError::new(
                ErrorKind::Parse,
                format!("'{}' takes no arguments, got {}", tuple.opcode, tuple.args.len()),
            ));
        }
        out.push(Command::ClosePath);
        return Ok(());
    }

    if tuple.args.is_empty() || tuple.args.len() % arity != 0 {
        return Err(PipelineError::new(
            ErrorKind::Parse,
            format!(
                "'{}' expects a multiple of {arity} arguments, got {}",
                tuple.opcode,
                tuple.args.len()
            ),
        ));
    }

    for (group, args) in tuple.args.chunks_exact(arity).enumerate() {
        let command = match kind {
            CommandKind::MoveTo if group == 0 => Command::MoveTo {
                positioning: if first {
                    Positioning::Absolute
                } else {
                    positioning
                },
                dest: point(args, 0),
            },
            CommandKind::MoveTo | CommandKind::LineTo => Command::LineTo {
                positioning,
                dest: point(args, 0),
            },
            CommandKind::HorizontalLineTo => Command::HorizontalLineTo {
                positioning,
                x: args[0],
            },
            CommandKind::VerticalLineTo => Command::VerticalLineTo {
                positioning,
                y: args[0],
            },
            CommandKind::CurveTo => Command::CurveTo {
                positioning,
                control_begin: point(args, 0),
                control_end: point(args, 2),
                dest: point(args, 4),
            },
            CommandKind::SmoothCurveTo => Command::SmoothCurveTo {
                positioning,
                control_end: point(args, 0),
                dest: point(args, 2),
            },
            CommandKind::QuadraticCurveTo => Command::QuadraticCurveTo {
                positioning,
                control: point(args, 0),
                dest: point(args, 2),
            },
            CommandKind::SmoothQuadraticCurveTo => Command::SmoothQuadraticCurveTo {
                positioning,
                dest: point(args, 0),
            },
            CommandKind::EllipticalArc => Command::EllipticalArc {
                positioning,
                shape: ArcShape {
                    radii: Vec2::new(args[0], args[1]),
                    rotation: args[2],
                    large_arc: args[3] != 0.0,
                    sweep: args[4] != 0.0,
                },
                dest: point(args, 5),
            },
            CommandKind::ClosePath => Command::ClosePath,
        };
        out.push(command);
    }
    Ok(())
}

fn point(args: &[Scalar], at: usize) -> Point {
    Point::new(args[at], args[at + 1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
