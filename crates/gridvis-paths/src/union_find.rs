//! Weighted union-find with full path compression.

use std::collections::HashMap;

use gridvis_core::Point;

/// One vertex cell tracked by a [`UnionFind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub pos: Point,
    parent: usize,
    size: usize,
}

/// Disjoint sets over vertex cells.
///
/// Vertices are addressed by their id, the position they had in the slice
/// passed to [`new`](Self::new). Every vertex starts as its own root with
/// size 1.
#[derive(Clone, Debug)]
pub struct UnionFind {
    vertices: Vec<Vertex>,
    ids: HashMap<Point, usize>,
}

impl UnionFind {
    /// One singleton set per position.
    pub fn new(positions: &[Point]) -> Self {
        let vertices = positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| Vertex {
                pos,
                parent: i,
                size: 1,
            })
            .collect();
        let ids = positions.iter().enumerate().map(|(i, &p)| (p, i)).collect();
        Self { vertices, ids }
    }

    /// Number of tracked vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no vertex is tracked.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Id of the vertex at `p`.
    pub fn id(&self, p: Point) -> Option<usize> {
        self.ids.get(&p).copied()
    }

    /// The vertex with id `v`.
    pub fn vertex(&self, v: usize) -> &Vertex {
        &self.vertices[v]
    }

    /// Representative of `v`'s set. Every vertex on the way is re-parented
    /// directly onto the root.
    pub fn find(&mut self, v: usize) -> usize {
        let parent = self.vertices[v].parent;
        if parent == v {
            return v;
        }
        let root = self.find(parent);
        self.vertices[v].parent = root;
        root
    }

    /// Whether `u` and `v` are in the same set.
    pub fn same_set(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merge the sets of `u` and `v` and return the new representative.
    ///
    /// The root of the smaller tree goes under the root of the larger one;
    /// on equal sizes `u`'s root goes under `v`'s.
    pub fn union(&mut self, u: usize, v: usize) -> usize {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return ru;
        }
        let (root, child) = if self.vertices[ru].size > self.vertices[rv].size {
            (ru, rv)
        } else {
            (rv, ru)
        };
        self.vertices[child].parent = root;
        self.vertices[root].size += self.vertices[child].size;
        root
    }

    /// Number of vertices in `v`'s set.
    pub fn set_size(&mut self, v: usize) -> usize {
        let r = self.find(v);
        self.vertices[r].size
    }
}
