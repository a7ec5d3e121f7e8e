//! Run configuration and the single entry point that dispatches on it.

use gridvis_core::{Grid, GridError, Point};

use crate::edge::Edge;
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::search::{reconstruct_path, shortest_path};
use crate::spanning::{EdgeDirection, kruskals, prims};

/// The algorithms a board can be run with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AstarEuclidean,
    AstarManhattan,
    Prims,
    Kruskals,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Self::Dijkstra,
        Self::AstarEuclidean,
        Self::AstarManhattan,
        Self::Prims,
        Self::Kruskals,
    ];

    /// Heuristic used by the pathfinding algorithms; `None` for the rest.
    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Self::Dijkstra => Some(Heuristic::None),
            Self::AstarEuclidean => Some(Heuristic::Euclidean),
            Self::AstarManhattan => Some(Heuristic::Manhattan),
            Self::Prims | Self::Kruskals => None,
        }
    }

    /// Whether this builds a spanning tree rather than a path.
    pub fn is_spanning(self) -> bool {
        matches!(self, Self::Prims | Self::Kruskals)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra's",
            Self::AstarEuclidean => "A* (Euclidean Heuristic)",
            Self::AstarManhattan => "A* (Manhattan Heuristic)",
            Self::Prims => "Prim's",
            Self::Kruskals => "Kruskal's",
        }
    }

    /// Reset `grid` for a run of this algorithm, dropping the flags it
    /// does not use.
    ///
    /// Pathfinding keeps walls, weights, start and finish. Prim's keeps
    /// vertices and the start (its root). Kruskal's keeps vertices only.
    pub fn prepare(self, grid: &mut Grid) {
        grid.reset();
        for c in grid.cells_mut() {
            match self {
                Self::Dijkstra | Self::AstarEuclidean | Self::AstarManhattan => {
                    c.vertex = false;
                }
                Self::Prims => {
                    c.wall = false;
                    c.weighted = false;
                    c.finish = false;
                }
                Self::Kruskals => {
                    c.wall = false;
                    c.weighted = false;
                    c.finish = false;
                    c.start = false;
                }
            }
        }
    }
}

/// Everything a run needs besides the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    pub algorithm: Algorithm,
    /// Edge orientation for Kruskal's; ignored by the other algorithms.
    pub direction: EdgeDirection,
}

impl RunConfig {
    /// Config for `algorithm` with default settings.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Set the Kruskal's edge orientation (builder).
    pub fn with_direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// The ordered result of a run, ready to be replayed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutput {
    /// Cells in finalisation order, and the route between start and finish
    /// (endpoints excluded; empty when the finish was not reached).
    Path {
        visited: Vec<Point>,
        path: Vec<Point>,
        reached: bool,
    },
    /// Spanning-tree edges in the order they were added.
    Tree { edges: Vec<Edge> },
}

/// Run the configured algorithm on `grid`.
///
/// The grid's search state is reset first; structural flags are read as
/// they are. Pathfinding needs a start and a finish, Prim's a start, and
/// Kruskal's at least one vertex.
pub fn run(grid: &mut Grid, config: &RunConfig) -> Result<RunOutput, SearchError> {
    log::debug!("run: {}", config.algorithm.name());
    grid.reset();
    match config.algorithm {
        Algorithm::Prims => Ok(RunOutput::Tree {
            edges: prims(grid)?,
        }),
        Algorithm::Kruskals => Ok(RunOutput::Tree {
            edges: kruskals(grid, config.direction)?,
        }),
        Algorithm::Dijkstra | Algorithm::AstarEuclidean | Algorithm::AstarManhattan => {
            let heuristic = config.algorithm.heuristic().unwrap_or_default();
            let start = grid.start().ok_or(GridError::MissingStart)?;
            let finish = grid.finish().ok_or(GridError::MissingFinish)?;
            let visited = shortest_path(grid, start, finish, heuristic)?;
            let reached = grid[finish].visited;
            let path = if reached {
                reconstruct_path(grid, finish)
            } else {
                Vec::new()
            };
            Ok(RunOutput::Path {
                visited,
                path,
                reached,
            })
        }
    }
}
