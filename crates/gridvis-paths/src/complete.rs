//! Complete graph over a set of vertex cells.

use std::collections::HashSet;

use gridvis_core::{Grid, GridError, Point};

use crate::edge::Edge;
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::search::{reconstruct_path, shortest_path};

/// Connect every unordered pair of `vertices` with the grid shortest path
/// between them.
///
/// Each pair is searched with A* (manhattan) on a scratch grid of the same
/// shape as `grid` that carries none of its walls or weights. For the pair
/// `(vertices[i], vertices[j])`, `i < j`, two edges are emitted next to each
/// other: `i -> j` first, then its reverse. The result therefore has
/// `n * (n - 1)` edges and the forward edge of every pair sits at an even
/// index. Repeated points are kept once, at their first position.
pub fn complete_graph(vertices: &[Point], grid: &Grid) -> Result<Vec<Edge>, SearchError> {
    if let Some(&p) = vertices.iter().find(|&&p| !grid.contains(p)) {
        return Err(GridError::OutOfBounds(p).into());
    }
    let mut seen = HashSet::with_capacity(vertices.len());
    let vertices: Vec<Point> = vertices.iter().copied().filter(|&p| seen.insert(p)).collect();
    let n = vertices.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));
    if n < 2 {
        return Ok(edges);
    }

    let mut work = Grid::new(grid.rows(), grid.cols())?;
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            work.set_start(a)?;
            work.set_finish(b)?;
            shortest_path(&mut work, a, b, Heuristic::Manhattan)?;
            if !work[b].visited {
                log::warn!("complete_graph: no path between {a} and {b}, pair left out");
                continue;
            }
            let edge = Edge::new(a, b, reconstruct_path(&work, b));
            let back = edge.reversed();
            edges.push(edge);
            edges.push(back);
        }
    }

    log::debug!("complete_graph: {n} vertices, {} directed edges", edges.len());
    Ok(edges)
}
