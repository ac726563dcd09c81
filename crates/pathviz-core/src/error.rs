//! Errors for grid construction and editing.

use std::fmt;

use crate::geom::Pos;

/// Errors that can occur when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Size is zero or too large to allocate.
    InvalidSize(usize),
    /// A position lies outside the grid.
    OutOfBounds { pos: Pos, size: usize },
    /// Text form of a grid could not be parsed.
    Parse { line: usize, reason: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "invalid grid size {n}"),
            Self::OutOfBounds { pos, size } => {
                write!(f, "position {pos} is outside the {size}x{size} grid")
            }
            Self::Parse { line, reason } => write!(f, "grid text, line {line}: {reason}"),
        }
    }
}

impl std::error::Error for GridError {}
