//! The [`Cell`] type: one grid position with its flags and search state.

use crate::geom::Point;

/// A single grid position.
///
/// The structural flags (`wall`, `weighted`, `vertex`, `start`, `finish`)
/// describe the board and are only changed between computations. The
/// remaining fields are search state, written by the algorithms and restored
/// by [`reset`](Cell::reset).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub wall: bool,
    pub weighted: bool,
    pub vertex: bool,
    pub start: bool,
    pub finish: bool,
    /// Best known distance from the source; `f64::INFINITY` when unreached.
    #[cfg_attr(feature = "serde", serde(with = "infinite_as_none"))]
    pub distance: f64,
    /// Heap ordering key: `distance`, plus the heuristic estimate under A*.
    #[cfg_attr(feature = "serde", serde(with = "infinite_as_none"))]
    pub priority: f64,
    /// Set once the cell has been popped and its distance finalised.
    pub visited: bool,
    /// Position this cell was reached from on the current shortest-path tree.
    pub previous: Option<Point>,
}

impl Cell {
    /// A fresh, unflagged cell at `pos`.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            wall: false,
            weighted: false,
            vertex: false,
            start: false,
            finish: false,
            distance: f64::INFINITY,
            priority: f64::INFINITY,
            visited: false,
            previous: None,
        }
    }

    /// Set the wall flag (builder).
    #[inline]
    pub const fn with_wall(mut self, wall: bool) -> Self {
        self.wall = wall;
        self
    }

    /// Set the weighted flag (builder).
    #[inline]
    pub const fn with_weight(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Restore the search state, keeping every structural flag.
    pub fn reset(&mut self) {
        self.distance = f64::INFINITY;
        self.priority = f64::INFINITY;
        self.visited = false;
        self.previous = None;
    }

    /// Whether the search state is untouched.
    pub fn is_reset(&self) -> bool {
        self.distance == f64::INFINITY
            && self.priority == f64::INFINITY
            && !self.visited
            && self.previous.is_none()
    }

    /// Whether the search has reached this cell at all.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }
}

// JSON has no infinity, so unreached distances travel as `null`.
#[cfg(feature = "serde")]
mod infinite_as_none {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        let finite = if v.is_finite() { Some(*v) } else { None };
        finite.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::INFINITY))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn unreached_distance_round_trips() {
        let c = Cell::new(Point::new(4, 2)).with_wall(true);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"distance\":null"));
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
