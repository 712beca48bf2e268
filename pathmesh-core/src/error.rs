//! Error types for the path pipeline.

use std::fmt;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// An error produced by any pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl PipelineError {
    /// Create a new error.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PipelineError {}

// ---------------------------------------------------------------------------
// Error kinds
// ---------------------------------------------------------------------------

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed path text, unknown opcode, or wrong argument count.
    Parse,
    /// No matching path in the input document, or an ambiguous selection.
    InputSelection,
    /// A ring with fewer than 3 points, an empty sub-path, or a path with
    /// zero extent.
    DegenerateRing,
    /// The hole-seed search gave up after its retry cap.
    HoleNotFound,
    /// A pipeline stage was invoked out of order.
    StageOrder,
    /// The triangulation engine rejected its input.
    Triangulation,
    /// Reading or writing a file failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "parse error"),
            Self::InputSelection => write!(f, "input selection error"),
            Self::DegenerateRing => write!(f, "degenerate ring"),
            Self::HoleNotFound => write!(f, "hole not found"),
            Self::StageOrder => write!(f, "stage order error"),
            Self::Triangulation => write!(f, "triangulation error"),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

/// Convenience type alias for results using [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
