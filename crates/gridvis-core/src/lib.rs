//! **gridvis-core**: the grid model shared by the gridvis algorithms.
//!
//! This crate provides `(row, col)` geometry, the [`Cell`] node with its
//! structural flags and per-run search state, and the [`Grid`] arena that
//! owns every cell of a board.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{DEFAULT_COLS, DEFAULT_FINISH, DEFAULT_ROWS, DEFAULT_START, Grid};
