//! Errors raised when a grid does not meet a computation's preconditions.

use std::fmt;

use crate::geom::Point;

/// Malformed or incomplete grid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    InvalidShape { rows: i32, cols: i32 },
    /// A position outside the grid was passed in.
    OutOfBounds(Point),
    /// No cell is flagged as start.
    MissingStart,
    /// No cell is flagged as finish.
    MissingFinish,
    /// A spanning computation found no vertex-flagged cell.
    NoVertices,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { rows, cols } => {
                write!(f, "grid: invalid shape {rows}x{cols}")
            }
            Self::OutOfBounds(p) => write!(f, "grid: position {p} is out of bounds"),
            Self::MissingStart => f.write_str("grid: no start cell"),
            Self::MissingFinish => f.write_str("grid: no finish cell"),
            Self::NoVertices => f.write_str("grid: no vertex cells"),
        }
    }
}

impl std::error::Error for GridError {}
