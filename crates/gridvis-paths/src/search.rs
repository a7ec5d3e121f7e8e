//! Single-source shortest paths: Dijkstra, and A* when a heuristic is set.

use gridvis_core::{Cell, Grid, GridError, Point};

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::queue::PriorityQueue;

/// Cost of stepping between two adjacent cells.
///
/// A step costs 1, plus 1 for each endpoint that is weighted.
#[inline]
pub fn step_cost(from: &Cell, to: &Cell) -> f64 {
    1.0 + f64::from(u8::from(from.weighted)) + f64::from(u8::from(to.weighted))
}

/// Search from `start` towards `finish` and return the cells finalised on
/// the way, in finalisation order.
///
/// The grid's search state is reset first. Every cell is queued up front;
/// walls are popped and dropped without being finalised, and the search
/// stops as soon as `finish` is finalised or the cheapest remaining cell is
/// unreachable. `start` itself is not part of the returned sequence.
///
/// After the call each reached cell carries its `distance` and `previous`
/// link, so [`reconstruct_path`] can rebuild the route. Whether the finish
/// was reached is `grid[finish].visited`.
pub fn shortest_path(
    grid: &mut Grid,
    start: Point,
    finish: Point,
    heuristic: Heuristic,
) -> Result<Vec<Point>, SearchError> {
    let start_idx = grid.idx(start).ok_or(GridError::OutOfBounds(start))?;
    let finish_idx = grid.idx(finish).ok_or(GridError::OutOfBounds(finish))?;

    grid.reset();
    grid.cells_mut()[start_idx].distance = 0.0;

    let mut open = PriorityQueue::with_capacity(grid.len());
    for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
        cell.priority = cell.distance;
        open.insert(i, cell.priority);
    }

    log::debug!(
        "shortest_path {start} -> {finish} on {}x{} grid ({heuristic:?})",
        grid.rows(),
        grid.cols()
    );

    let mut visited = Vec::new();
    let mut nb = Neighbors::new();

    while !open.is_empty() {
        let (ci, _) = open.pop()?;
        let current = grid.cells()[ci];
        if current.wall {
            continue;
        }
        // Everything left in the queue is cut off from the start.
        if !current.is_reached() {
            break;
        }
        grid.cells_mut()[ci].visited = true;
        if ci != start_idx {
            visited.push(current.pos);
        }
        if ci == finish_idx {
            break;
        }

        let frontier = nb.cardinal(grid, current.pos, |n| {
            let c = &grid[n];
            !c.visited && !c.wall
        });
        for &np in frontier {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let next = &mut grid.cells_mut()[ni];
            let tentative = current.distance + step_cost(&current, next);
            if tentative >= next.distance {
                continue;
            }
            next.distance = tentative;
            next.previous = Some(current.pos);
            next.priority = tentative + heuristic.estimate(np, finish);
            open.update(ni, next.priority);
        }
    }

    log::debug!(
        "shortest_path finalised {} cells, finish {}",
        visited.len(),
        if grid[finish].visited { "reached" } else { "unreachable" }
    );
    Ok(visited)
}

/// Walk the `previous` links back from `finish` and return the route in
/// start-to-finish order, with both endpoints left out.
///
/// Only meaningful after a [`shortest_path`] run that reached `finish`. An
/// empty result means there is no path (or start and finish are adjacent
/// or identical; check `grid[finish].visited` to tell these apart).
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let Some(end) = grid.get(finish) else {
        return path;
    };
    if !end.is_reached() {
        return path;
    }
    let mut cur = end.previous;
    while let Some(p) = cur {
        let Some(cell) = grid.get(p) else {
            return Vec::new();
        };
        if cell.previous.is_none() {
            // Reached the chain's root, which must be the source.
            if cell.distance != 0.0 {
                return Vec::new();
            }
            break;
        }
        path.push(p);
        if path.len() > grid.len() {
            return Vec::new();
        }
        cur = cell.previous;
    }
    path.reverse();
    path
}
