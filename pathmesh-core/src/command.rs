//! Drawing commands.
//!
//! A path string is first tokenized into [`RawCommand`]s (an opcode letter
//! plus its flat argument list), then expanded into atomic [`Command`]s that
//! each describe exactly one segment.
//!
//! The opcode letter determines two things: the command kind (via the
//! fixed letter table in [`CommandKind::from_letter`]) and the positioning
//! (upper case = absolute, lower case = relative).

use std::fmt;

use pathmesh_graphics::types::{Point, Scalar, Vec2};

// ---------------------------------------------------------------------------
// Raw commands
// ---------------------------------------------------------------------------

/// One opcode and every numeric argument that followed it in the source.
///
/// A raw command may describe several segments at once (`L 1 2 3 4` is two
/// line segments); the expander splits it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub opcode: char,
    pub args: Vec<Scalar>,
}

impl RawCommand {
    pub fn new(opcode: char, args: impl Into<Vec<Scalar>>) -> Self {
        Self {
            opcode,
            args: args.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Positioning
// ---------------------------------------------------------------------------

/// Whether a command's coordinates are absolute or relative to the current
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Absolute,
    Relative,
}

impl Positioning {
    /// Positioning encoded by the case of an opcode letter.
    pub const fn from_letter(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Self::Absolute
        } else {
            Self::Relative
        }
    }
}

// ---------------------------------------------------------------------------
// Command kinds
// ---------------------------------------------------------------------------

/// Long-form command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    ClosePath,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArc,
}

/// Opcode letter table, lower case.
const LETTERS: [(char, CommandKind); 10] = [
    ('m', CommandKind::MoveTo),
    ('z', CommandKind::ClosePath),
    ('l', CommandKind::LineTo),
    ('h', CommandKind::HorizontalLineTo),
    ('v', CommandKind::VerticalLineTo),
    ('c', CommandKind::CurveTo),
    ('s', CommandKind::SmoothCurveTo),
    ('q', CommandKind::QuadraticCurveTo),
    ('t', CommandKind::SmoothQuadraticCurveTo),
    ('a', CommandKind::EllipticalArc),
];

impl CommandKind {
    /// Look up an opcode letter in either case.
    pub fn from_letter(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .find_map(|&(l, kind)| (l == lower).then_some(kind))
    }

    /// Number of arguments consumed by one atomic command of this kind.
    pub const fn arity(self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => 2,
            Self::SmoothCurveTo | Self::QuadraticCurveTo => 4,
            Self::CurveTo => 6,
            Self::EllipticalArc => 7,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MoveTo => "moveto",
            Self::ClosePath => "closepath",
            Self::LineTo => "lineto",
            Self::HorizontalLineTo => "horizontal_lineto",
            Self::VerticalLineTo => "vertical_lineto",
            Self::CurveTo => "curveto",
            Self::SmoothCurveTo => "smooth_curveto",
            Self::QuadraticCurveTo => "quadratic_bezier_curveto",
            Self::SmoothQuadraticCurveTo => "smooth_quadratic_bezier_curveto",
            Self::EllipticalArc => "elliptical_arc",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Atomic commands
// ---------------------------------------------------------------------------

/// Parameters of an elliptical arc that are not positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub radii: Vec2,
    /// X-axis rotation in degrees.
    pub rotation: Scalar,
    pub large_arc: bool,
    pub sweep: bool,
}

/// A single-segment drawing command.
///
/// Every variant except `ClosePath` carries its positioning and exactly the
/// coordinates needed to draw one segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveTo {
        positioning: Positioning,
        dest: Point,
    },
    LineTo {
        positioning: Positioning,
        dest: Point,
    },
    HorizontalLineTo {
        positioning: Positioning,
        x: Scalar,
    },
    VerticalLineTo {
        positioning: Positioning,
        y: Scalar,
    },
    CurveTo {
        positioning: Positioning,
        control_begin: Point,
        control_end: Point,
        dest: Point,
    },
    SmoothCurveTo {
        positioning: Positioning,
        control_end: Point,
        dest: Point,
    },
    QuadraticCurveTo {
        positioning: Positioning,
        control: Point,
        dest: Point,
    },
    SmoothQuadraticCurveTo {
        positioning: Positioning,
        dest: Point,
    },
    EllipticalArc {
        positioning: Positioning,
        shape: ArcShape,
        dest: Point,
    },
    ClosePath,
}

impl Command {
    /// Absolute line to `dest`.
    pub const fn line_to(dest: Point) -> Self {
        Self::LineTo {
            positioning: Positioning::Absolute,
            dest,
        }
    }

    /// Absolute move to `dest`.
    pub const fn move_to(dest: Point) -> Self {
        Self::MoveTo {
            positioning: Positioning::Absolute,
            dest,
        }
    }

    /// Absolute cubic curve.
    pub const fn curve_to(control_begin: Point, control_end: Point, dest: Point) -> Self {
        Self::CurveTo {
            positioning: Positioning::Absolute,
            control_begin,
            control_end,
            dest,
        }
    }

    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo { .. } => CommandKind::MoveTo,
            Self::LineTo { .. } => CommandKind::LineTo,
            Self::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            Self::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            Self::CurveTo { .. } => CommandKind::CurveTo,
            Self::SmoothCurveTo { .. } => CommandKind::SmoothCurveTo,
            Self::QuadraticCurveTo { .. } => CommandKind::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo { .. } => CommandKind::SmoothQuadraticCurveTo,
            Self::EllipticalArc { .. } => CommandKind::EllipticalArc,
            Self::ClosePath => CommandKind::ClosePath,
        }
    }

    /// Positioning mode; `None` for `ClosePath`.
    pub const fn positioning(&self) -> Option<Positioning> {
        match self {
            Self::MoveTo { positioning, .. }
            | Self::LineTo { positioning, .. }
            | Self::HorizontalLineTo { positioning, .. }
            | Self::VerticalLineTo { positioning, .. }
            | Self::CurveTo { positioning, .. }
            | Self::SmoothCurveTo { positioning, .. }
            | Self::QuadraticCurveTo { positioning, .. }
            | Self::SmoothQuadraticCurveTo { positioning, .. }
            | Self::EllipticalArc { positioning, .. } => Some(*positioning),
            Self::ClosePath => None,
        }
    }

    /// Destination point, for commands that carry a full one.
    ///
    /// Horizontal and vertical lines only know one coordinate until they
    /// are resolved against the current position, so they return `None`.
    pub const fn dest(&self) -> Option<Point> {
        match self {
            Self::MoveTo { dest, .. }
            | Self::LineTo { dest, .. }
            | Self::CurveTo { dest, .. }
            | Self::SmoothCurveTo { dest, .. }
            | Self::QuadraticCurveTo { dest, .. }
            | Self::SmoothQuadraticCurveTo { dest, .. }
            | Self::EllipticalArc { dest, .. } => Some(*dest),
            Self::HorizontalLineTo { .. } | Self::VerticalLineTo { .. } | Self::ClosePath => None,
        }
    }

    /// Every point-valued coordinate field present on this command, control
    /// points first and the destination last.
    pub fn coordinates(&self) -> Vec<Point> {
        match self {
            Self::CurveTo {
                control_begin,
                control_end,
                dest,
                ..
            } => vec![*control_begin, *control_end, *dest],
            Self::SmoothCurveTo {
                control_end: control,
                dest,
                ..
            }
            | Self::QuadraticCurveTo { control, dest, .. } => vec![*control, *dest],
            _ => self.dest().into_iter().collect(),
        }
    }

    /// Apply `f` to every coordinate field.
    ///
    /// `f` must act on each axis independently: the single coordinate of a
    /// horizontal or vertical line is mapped as one axis of a point whose
    /// other axis is zero.
    #[must_use]
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            Self::MoveTo { positioning, dest } => Self::MoveTo {
                positioning,
                dest: f(dest),
            },
            Self::LineTo { positioning, dest } => Self::LineTo {
                positioning,
                dest: f(dest),
            },
            Self::HorizontalLineTo { positioning, x } => Self::HorizontalLineTo {
                positioning,
                x: f(Point::new(x, 0.0)).x,
            },
            Self::VerticalLineTo { positioning, y } => Self::VerticalLineTo {
                positioning,
                y: f(Point::new(0.0, y)).y,
            },
            Self::CurveTo {
                positioning,
                control_begin,
                control_end,
                dest,
            } => Self::CurveTo {
                positioning,
                control_begin: f(control_begin),
                control_end: f(control_end),
                dest: f(dest),
            },
            Self::SmoothCurveTo {
                positioning,
                control_end,
                dest,
            } => Self::SmoothCurveTo {
                positioning,
                control_end: f(control_end),
                dest: f(dest),
            },
            Self::QuadraticCurveTo {
                positioning,
                control,
                dest,
            } => Self::QuadraticCurveTo {
                positioning,
                control: f(control),
                dest: f(dest),
            },
            Self::SmoothQuadraticCurveTo { positioning, dest } => Self::SmoothQuadraticCurveTo {
                positioning,
                dest: f(dest),
            },
            Self::EllipticalArc {
                positioning,
                shape,
                dest,
            } => Self::EllipticalArc {
                positioning,
                shape,
                dest: f(dest),
            },
            Self::ClosePath => Self::ClosePath,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
