use gridvis_core::Point;

/// Scale applied to every heuristic estimate.
///
/// It inflates the estimate just enough to break priority ties in favour of
/// cells nearer the goal, and stays far below the smallest step cost of 1.
pub const TIE_BREAK: f64 = 1.001;

/// Remaining-distance estimate used to order the A* frontier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// No estimate: plain Dijkstra.
    #[default]
    None,
    /// Straight-line distance.
    Euclidean,
    /// Sum of row and column offsets.
    Manhattan,
}

impl Heuristic {
    /// Estimated distance from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Euclidean => euclidean(from, goal),
            Self::Manhattan => manhattan(from, goal),
        }
    }
}

/// Euclidean (L2) distance between two points, scaled by [`TIE_BREAK`].
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    TIE_BREAK * (dr * dr + dc * dc).sqrt()
}

/// Manhattan (L1) distance between two points, scaled by [`TIE_BREAK`].
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    TIE_BREAK * f64::from((a.row - b.row).abs() + (a.col - b.col).abs())
}
