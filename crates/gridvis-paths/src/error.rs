use std::fmt;

use gridvis_core::GridError;

/// Errors returned by the search and spanning-tree engines.
///
/// An unreachable finish is not an error: the search returns what it
/// visited and [`reconstruct_path`](crate::reconstruct_path) yields an
/// empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `pop` or `peek` on an empty [`PriorityQueue`](crate::PriorityQueue).
    EmptyQueue,
    /// The grid does not satisfy the computation's preconditions.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQueue => f.write_str("priority queue is empty"),
            Self::Grid(e) => write!(f, "invalid input: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyQueue => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
