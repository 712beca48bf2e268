//! Path-data tokenizer.
//!
//! Tokenization is delegated to `svgtypes`, which reads every number as
//! `f64`. Its segments are turned back into [`RawCommand`]s so the expander
//! sees an opcode letter (case = positioning) and its argument list.
//!
//! The tokenizer already splits repeated argument groups: `L 1 2 3 4`
//! arrives as two line segments, and the pairs after a `moveto` arrive as
//! line segments of the same positioning.

use log::trace;
use svgtypes::{PathParser, PathSegment};

use crate::command::RawCommand;
use crate::error::{ErrorKind, PipelineError, PipelineResult};

/// Tokenize a path string into opcode/argument tuples.
///
/// # Errors
///
/// Returns a [`ErrorKind::Parse`] error for malformed path text, including
/// a path that does not start with a `moveto`.
pub fn parse_path(d: &str) -> PipelineResult<Vec<RawCommand>> {
    let raw = PathParser::from(d)
        .map(|segment| {
            segment
                .map(to_raw)
                .map_err(|e| PipelineError::new(ErrorKind::Parse, format!("invalid path data: {e}")))
        })
        .collect::<PipelineResult<Vec<_>>>()?;
    trace!("parsed {} raw commands", raw.len());
    Ok(raw)
}

const fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn to_raw(segment: PathSegment) -> RawCommand {
    let (letter, abs, args) = match segment {
        PathSegment::MoveTo { abs, x, y } => ('m', abs, vec![x, y]),
        PathSegment::LineTo { abs, x, y } => ('l', abs, vec![x, y]),
        PathSegment::HorizontalLineTo { abs, x } => ('h', abs, vec![x]),
        PathSegment::VerticalLineTo { abs, y } => ('v', abs, vec![y]),
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => ('c', abs, vec![x1, y1, x2, y2, x, y]),
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => ('s', abs, vec![x2, y2, x, y]),
        PathSegment::Quadratic { abs, x1, y1, x, y } => ('q', abs, vec![x1, y1, x, y]),
        PathSegment::SmoothQuadratic { abs, x, y } => ('t', abs, vec![x, y]),
        PathSegment::EllipticalArc {
            abs,
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
        } => (
            'a',
            abs,
            vec![rx, ry, x_axis_rotation, flag(large_arc), flag(sweep), x, y],
        ),
        PathSegment::ClosePath { abs } => ('z', abs, Vec::new()),
    };
    let opcode = if abs { letter.to_ascii_uppercase() } else { letter };
    RawCommand::new(opcode, args)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact float comparisons are intentional in tests"
)]
mod tests {
    use super::*;

    #[test]
    fn parses_square() {
        let raw = parse_path("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
        assert_eq!(
            raw,
            vec![
                RawCommand::new('M', vec![0.0, 0.0]),
                RawCommand::new('L', vec![10.0, 0.0]),
                RawCommand::new('L', vec![10.0, 10.0]),
                RawCommand::new('L', vec![0.0, 10.0]),
                RawCommand::new('Z', Vec::new()),
            ]
        );
    }

    #[test]
    fn keeps_relative_case_and_splits_repeated_arguments() {
        let raw = parse_path("m 1 2 3 4 c 1 1 2 2 3 3").unwrap();
        assert_eq!(
            raw,
            vec![
                RawCommand::new('m', vec![1.0, 2.0]),
                RawCommand::new('l', vec![3.0, 4.0]),
                RawCommand::new('c', vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
            ]
        );
    }

    #[test]
    fn every_opcode_is_recognized() {
        let raw = parse_path("M0 0 H5 V5 h1 v1 S1 1 2 2 Q1 1 2 2 T3 3 A1 1 30 0 1 4 4 z").unwrap();
        let letters: String = raw.iter().map(|r| r.opcode).collect();
        assert_eq!(letters, "MHVhvSQTAz");
        assert_eq!(raw[8].args, vec![1.0, 1.0, 30.0, 0.0, 1.0, 4.0, 4.0]);
    }

    #[test]
    fn coordinates_keep_double_precision() {
        let raw = parse_path("M0.1,0.3 L16777217,0 L100000.01,100000.02").unwrap();
        assert_eq!(raw[0].args, vec![0.1, 0.3]);
        assert_eq!(raw[1].args, vec![16_777_217.0, 0.0]);
        assert_eq!(raw[2].args, vec![100_000.01, 100_000.02]);
    }

    #[test]
    fn large_coordinates_stay_finite() {
        let raw = parse_path("M0,0 L1e40,0").unwrap();
        assert_eq!(raw[1].args, vec![1e40, 0.0]);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = parse_path("M0,0 X10,0").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(parse_path("M0,0 L1").unwrap_err().kind, ErrorKind::Parse);
    }

    #[test]
    fn path_must_start_with_moveto() {
        assert_eq!(parse_path("L1,1").unwrap_err().kind, ErrorKind::Parse);
    }

    #[test]
    fn empty_path_has_no_commands() {
        assert!(parse_path("").unwrap().is_empty());
    }
}
