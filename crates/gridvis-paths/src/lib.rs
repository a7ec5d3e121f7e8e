//! Shortest paths and minimum spanning trees on gridvis boards.
//!
//! This crate provides the algorithm engine behind the visualiser:
//!
//! - **Dijkstra** and **A\*** single-source search ([`shortest_path`],
//!   [`reconstruct_path`]) over four-connected grids with walls and
//!   weighted cells
//! - a derived **complete graph** over vertex cells, one grid shortest path
//!   per pair ([`complete_graph`])
//! - **Prim's** and **Kruskal's** minimum spanning trees over that graph
//!   ([`prims`], [`kruskals`])
//!
//! along with the [`PriorityQueue`] and [`UnionFind`] they are built on.
//! Every computation is synchronous and runs to completion on a grid it has
//! exclusive access to; [`run`] dispatches on an explicit [`RunConfig`].
//!
//! # Step costs
//!
//! | Move | Cost |
//! |---|---|
//! | plain → plain | 1 |
//! | plain ↔ weighted | 2 |
//! | weighted → weighted | 3 |

mod complete;
mod config;
mod edge;
mod error;
mod heuristic;
mod neighbors;
mod queue;
mod search;
mod spanning;
mod union_find;

pub use complete::complete_graph;
pub use config::{Algorithm, RunConfig, RunOutput, run};
pub use edge::{Edge, total_weight};
pub use error::SearchError;
pub use heuristic::{Heuristic, TIE_BREAK, euclidean, manhattan};
pub use neighbors::Neighbors;
pub use queue::PriorityQueue;
pub use search::{reconstruct_path, shortest_path, step_cost};
pub use spanning::{EdgeDirection, kruskals, prims};
pub use union_find::{UnionFind, Vertex};
