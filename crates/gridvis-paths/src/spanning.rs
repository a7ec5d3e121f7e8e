//! Minimum spanning trees over the vertex cells of a grid.
//!
//! Both builders first derive the complete graph with
//! [`complete_graph`](crate::complete_graph) and return the tree's edges in
//! the order they were added, each carrying the cells it walks through.

use std::collections::HashMap;

use gridvis_core::{Grid, GridError, Point};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::complete::complete_graph;
use crate::edge::{Edge, total_weight};
use crate::error::SearchError;
use crate::queue::PriorityQueue;
use crate::union_find::UnionFind;

/// Which of the two directed edges of a pair Kruskal's keeps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeDirection {
    /// Always walk from the endpoint that comes first in row-major order.
    #[default]
    Forward,
    /// Flip a coin per pair, using a generator seeded with `seed`.
    Random { seed: u64 },
}

/// Prim's algorithm, rooted at the grid's start cell.
///
/// The tree spans every vertex-flagged cell plus the start cell. Each
/// vertex's `distance` holds the weight of its cheapest known edge into the
/// tree and `previous` the tree vertex that edge comes from. The grid's
/// search state is reset before use.
pub fn prims(grid: &mut Grid) -> Result<Vec<Edge>, SearchError> {
    let start = grid.start().ok_or(GridError::MissingStart)?;
    let vertices: Vec<Point> = grid.iter().filter(|c| c.vertex || c.start).map(|c| c.pos).collect();

    grid.reset();
    let edges = complete_graph(&vertices, grid)?;

    let mut leaving: HashMap<Point, Vec<usize>> = HashMap::new();
    let mut by_ends: HashMap<(Point, Point), usize> = HashMap::with_capacity(edges.len());
    for (id, e) in edges.iter().enumerate() {
        leaving.entry(e.source).or_default().push(id);
        by_ends.insert((e.source, e.dest), id);
    }
    let mut traversed = vec![false; edges.len()];

    grid[start].distance = 0.0;
    let mut open = PriorityQueue::with_capacity(vertices.len());
    for &v in &vertices {
        let cell = &mut grid[v];
        cell.priority = cell.distance;
        open.insert(v, cell.priority);
    }

    let mut tree = Vec::with_capacity(vertices.len().saturating_sub(1));
    while !open.is_empty() {
        let (curr, _) = open.pop()?;
        grid[curr].visited = true;

        if curr != start {
            let Some(from) = grid[curr].previous else {
                log::warn!("prims: vertex {curr} is not connected to the tree");
                continue;
            };
            if let Some(&id) = by_ends.get(&(from, curr)) {
                traversed[id] = true;
                // The reverse edge sits next to the forward one.
                traversed[id ^ 1] = true;
                log::trace!("prims: add {from} -> {curr} (weight {})", edges[id].weight);
                tree.push(edges[id].clone());
            }
        }

        for &id in leaving.get(&curr).map(Vec::as_slice).unwrap_or_default() {
            if traversed[id] {
                continue;
            }
            let e = &edges[id];
            let dest = &mut grid[e.dest];
            if dest.visited {
                continue;
            }
            let weight = f64::from(e.weight);
            if weight < dest.distance {
                dest.distance = weight;
                dest.priority = weight;
                dest.previous = Some(curr);
                open.update(e.dest, weight);
            }
        }
    }

    log::debug!(
        "prims: {} vertices, {} edges, total weight {}",
        vertices.len(),
        tree.len(),
        total_weight(&tree)
    );
    Ok(tree)
}

/// Kruskal's algorithm over every vertex-flagged cell.
///
/// One directed edge per pair is kept according to `direction`, the
/// candidates are sorted by weight (ties keep row-major pair order) and each
/// one that joins two different components is accepted.
pub fn kruskals(grid: &Grid, direction: EdgeDirection) -> Result<Vec<Edge>, SearchError> {
    let vertices = grid.vertices();
    if vertices.is_empty() {
        return Err(GridError::NoVertices.into());
    }
    let edges = complete_graph(&vertices, grid)?;
    let mut candidates = pick_directions(edges, direction);
    candidates.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(&vertices);
    let mut tree = Vec::with_capacity(vertices.len() - 1);
    for e in candidates {
        let (Some(u), Some(v)) = (sets.id(e.source), sets.id(e.dest)) else {
            continue;
        };
        if sets.same_set(u, v) {
            log::trace!("kruskals: skip {} -> {} (cycle)", e.source, e.dest);
            continue;
        }
        log::trace!("kruskals: add {} -> {} (weight {})", e.source, e.dest, e.weight);
        sets.union(u, v);
        tree.push(e);
    }

    log::debug!(
        "kruskals: {} vertices, {} edges, total weight {}",
        vertices.len(),
        tree.len(),
        total_weight(&tree)
    );
    Ok(tree)
}

/// Keep one edge of every forward/backward pair produced by
/// [`complete_graph`].
fn pick_directions(edges: Vec<Edge>, direction: EdgeDirection) -> Vec<Edge> {
    let mut rng = match direction {
        EdgeDirection::Forward => None,
        EdgeDirection::Random { seed } => Some(StdRng::seed_from_u64(seed)),
    };
    let mut picked = Vec::with_capacity(edges.len() / 2);
    let mut it = edges.into_iter();
    while let (Some(forward), Some(backward)) = (it.next(), it.next()) {
        let keep_forward = match rng.as_mut() {
            None => true,
            Some(rng) => rng.random_range(0..2u32) == 0,
        };
        picked.push(if keep_forward { forward } else { backward });
    }
    picked
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen, quickcheck};

    use super::*;

    fn board(rows: i32, cols: i32, vertices: &[(i32, i32)]) -> Grid {
        let mut g = Grid::new(rows, cols).unwrap();
        for &p in vertices {
            g.toggle_vertex(p.into()).unwrap();
        }
        g
    }

    fn spans(tree: &[Edge], vertices: &[Point]) -> bool {
        let mut sets = UnionFind::new(vertices);
        for e in tree {
            let (u, v) = (sets.id(e.source).unwrap(), sets.id(e.dest).unwrap());
            if sets.same_set(u, v) {
                return false;
            }
            sets.union(u, v);
        }
        vertices.is_empty() || sets.set_size(0) == vertices.len()
    }

    #[test]
    fn kruskals_tree_shape() {
        let g = board(10, 12, &[(0, 0), (0, 11), (9, 0), (9, 11), (4, 5), (5, 6)]);
        let tree = kruskals(&g, EdgeDirection::Forward).unwrap();
        assert_eq!(tree.len(), 5);
        assert!(spans(&tree, &g.vertices()));
        assert!(tree.windows(2).all(|w| w[0].weight <= w[1].weight));
        // (4, 5) and (5, 6) are two hops apart, the cheapest pair.
        assert_eq!(tree[0].weight, 2);
    }

    #[test]
    fn kruskals_forward_direction_is_row_major() {
        let g = board(6, 6, &[(5, 5), (0, 0), (2, 3)]);
        for e in kruskals(&g, EdgeDirection::Forward).unwrap() {
            assert!(e.source < e.dest);
        }
    }

    #[test]
    fn kruskals_random_direction_is_reproducible() {
        let g = board(8, 8, &[(0, 0), (7, 7), (3, 4), (6, 1), (1, 6)]);
        let dir = EdgeDirection::Random { seed: 7 };
        let a = kruskals(&g, dir).unwrap();
        let b = kruskals(&g, dir).unwrap();
        assert_eq!(a, b);
        let forward = kruskals(&g, EdgeDirection::Forward).unwrap();
        assert_eq!(total_weight(&a), total_weight(&forward));
        assert!(spans(&a, &g.vertices()));
    }

    #[test]
    fn kruskals_needs_vertices() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            kruskals(&g, EdgeDirection::Forward),
            Err(SearchError::Grid(GridError::NoVertices))
        );
    }

    #[test]
    fn kruskals_single_vertex() {
        let g = board(3, 3, &[(1, 1)]);
        assert!(kruskals(&g, EdgeDirection::Forward).unwrap().is_empty());
    }

    #[test]
    fn prims_grows_from_start() {
        let mut g = board(10, 10, &[(0, 9), (9, 0), (9, 9), (5, 5)]);
        g.set_start(Point::new(0, 0)).unwrap();
        let tree = prims(&mut g).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree[0].source, Point::new(0, 0));
        let mut all = g.vertices();
        all.push(Point::new(0, 0));
        all.sort();
        assert!(spans(&tree, &all));
        // Every edge leaves a vertex that joined the tree earlier.
        let mut joined = vec![Point::new(0, 0)];
        for e in &tree {
            assert!(joined.contains(&e.source));
            assert!(!joined.contains(&e.dest));
            joined.push(e.dest);
        }
        assert!(all.iter().all(|&v| g[v].visited));
    }

    #[test]
    fn prims_needs_start() {
        let mut g = board(3, 3, &[(0, 0), (2, 2)]);
        assert_eq!(
            prims(&mut g),
            Err(SearchError::Grid(GridError::MissingStart))
        );
    }

    #[test]
    fn prims_start_only() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Point::new(1, 1)).unwrap();
        assert!(prims(&mut g).unwrap().is_empty());
    }

    #[test]
    fn prims_start_that_is_also_a_vertex() {
        let mut g = board(5, 5, &[(0, 0), (4, 4), (0, 4)]);
        g.set_start(Point::new(0, 0)).unwrap();
        let tree = prims(&mut g).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(total_weight(&tree), 8);
    }

    #[test]
    fn edge_paths_connect_their_endpoints() {
        let mut g = board(7, 9, &[(0, 8), (6, 0), (3, 4)]);
        g.set_start(Point::new(0, 0)).unwrap();
        for e in prims(&mut g).unwrap() {
            let mut walk = vec![e.source];
            walk.extend(&e.path);
            walk.push(e.dest);
            assert_eq!(walk.len() as u32 - 1, e.weight);
            for w in walk.windows(2) {
                let d = w[1] - w[0];
                assert_eq!(d.row.abs() + d.col.abs(), 1);
            }
        }
    }

    /// A handful of distinct vertex positions on a 9x9 board.
    #[derive(Clone, Debug)]
    struct Layout(Vec<Point>);

    impl Arbitrary for Layout {
        fn arbitrary(g: &mut Gen) -> Self {
            let n = usize::arbitrary(g) % 6 + 2;
            let mut pts = Vec::new();
            while pts.len() < n {
                let p = Point::new(i32::from(u8::arbitrary(g) % 9), i32::from(u8::arbitrary(g) % 9));
                if !pts.contains(&p) {
                    pts.push(p);
                }
            }
            Layout(pts)
        }
    }

    #[test]
    fn prims_and_kruskals_agree_on_weight() {
        fn prop(layout: Layout) -> bool {
            let mut g = Grid::new(9, 9).unwrap();
            for &p in &layout.0 {
                g.toggle_vertex(p).unwrap();
            }
            let k = kruskals(&g, EdgeDirection::Forward).unwrap();
            // Prim's roots at the first placed vertex.
            g.set_start(layout.0[0]).unwrap();
            let p = prims(&mut g).unwrap();
            let n = layout.0.len();
            k.len() == n - 1
                && p.len() == n - 1
                && total_weight(&k) == total_weight(&p)
                && spans(&k, &g.vertices())
        }
        quickcheck(prop as fn(Layout) -> bool);
    }
}
