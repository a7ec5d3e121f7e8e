use gridvis_core::Point;

/// A directed connection between two vertex cells of the derived complete
/// graph.
///
/// `path` holds the cells strictly between `source` and `dest`, in walking
/// order. `weight` is the number of hops, i.e. `path.len() + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: Point,
    pub dest: Point,
    pub path: Vec<Point>,
    pub weight: u32,
}

impl Edge {
    /// Build an edge from its intermediate cells; the weight follows from
    /// the path length.
    pub fn new(source: Point, dest: Point, path: Vec<Point>) -> Self {
        let weight = path.len() as u32 + 1;
        Self {
            source,
            dest,
            path,
            weight,
        }
    }

    /// The same connection walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.dest,
            dest: self.source,
            path: self.path.iter().rev().copied().collect(),
            weight: self.weight,
        }
    }

    /// Whether `other` is this edge or its reverse.
    pub fn same_connection(&self, other: &Edge) -> bool {
        (self.source == other.source && self.dest == other.dest)
            || (self.source == other.dest && self.dest == other.source)
    }

    /// The endpoint across from `p`, if `p` is an endpoint.
    pub fn other(&self, p: Point) -> Option<Point> {
        if p == self.source {
            Some(self.dest)
        } else if p == self.dest {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Sum of the weights of `edges`.
pub fn total_weight(edges: &[Edge]) -> u32 {
    edges.iter().map(|e| e.weight).sum()
}
