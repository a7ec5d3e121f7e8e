//! The [`Grid`] type: a fixed-size rectangle of [`Cell`]s.
//!
//! A `Grid` owns all of its cells in one row-major buffer. Algorithms refer
//! to cells by [`Point`] (or by flat index), never by pointer, so cloning a
//! grid yields a fully independent copy that can be searched on its own.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Rows of the board the visualiser starts with.
pub const DEFAULT_ROWS: i32 = 20;
/// Columns of the board the visualiser starts with.
pub const DEFAULT_COLS: i32 = 50;
/// Start position of the default pathfinding board.
pub const DEFAULT_START: Point = Point::new(10, 15);
/// Finish position of the default pathfinding board.
pub const DEFAULT_FINISH: Point = Point::new(10, 35);

/// Cell count of a `rows x cols` grid, or `None` if that shape cannot be
/// built.
fn shape_len(rows: i32, cols: i32) -> Option<usize> {
    if rows <= 0 || cols <= 0 {
        return None;
    }
    (rows as usize).checked_mul(cols as usize)
}

/// A 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create an open grid of `rows x cols` reset cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if shape_len(rows, cols).is_none() {
            return Err(GridError::InvalidShape { rows, cols });
        }
        Ok(Self::blank(Range::new(0, 0, rows, cols)))
    }

    /// Create an open grid with the given start and finish cells.
    pub fn pathfinding(rows: i32, cols: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        grid.set_start(start)?;
        grid.set_finish(finish)?;
        Ok(grid)
    }

    fn blank(bounds: Range) -> Self {
        Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
        }
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a grid built through [`new`](Self::new).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if outside.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// The cell at `p`, if inside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, if inside the grid.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Cell> {
        let i = self.idx(p)?;
        Some(&mut self.cells[i])
    }

    fn checked_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        self.get_mut(p).ok_or(GridError::OutOfBounds(p))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All cells in row-major order, mutably.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------------

    /// Position of the first start-flagged cell.
    pub fn start(&self) -> Option<Point> {
        self.cells.iter().find(|c| c.start).map(|c| c.pos)
    }

    /// Position of the first finish-flagged cell.
    pub fn finish(&self) -> Option<Point> {
        self.cells.iter().find(|c| c.finish).map(|c| c.pos)
    }

    /// Positions of every vertex-flagged cell, row-major.
    pub fn vertices(&self) -> Vec<Point> {
        self.cells.iter().filter(|c| c.vertex).map(|c| c.pos).collect()
    }

    /// Make `p` the only start cell. A start cell is never a wall or weight.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.checked_mut(p)?;
        for c in self.cells.iter_mut() {
            c.start = c.pos == p;
        }
        let c = self.checked_mut(p)?;
        c.wall = false;
        c.weighted = false;
        Ok(())
    }

    /// Make `p` the only finish cell. A finish cell is never a wall or weight.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GridError> {
        self.checked_mut(p)?;
        for c in self.cells.iter_mut() {
            c.finish = c.pos == p;
        }
        let c = self.checked_mut(p)?;
        c.wall = false;
        c.weighted = false;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Toggles
    // -----------------------------------------------------------------------

    /// Flip the wall flag at `p`. Weighted, start and finish cells are left
    /// alone. Returns whether the cell changed.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let c = self.checked_mut(p)?;
        if c.weighted || c.start || c.finish {
            return Ok(false);
        }
        c.wall = !c.wall;
        Ok(true)
    }

    /// Flip the weighted flag at `p`. Walls, start and finish cells are left
    /// alone. Returns whether the cell changed.
    pub fn toggle_weight(&mut self, p: Point) -> Result<bool, GridError> {
        let c = self.checked_mut(p)?;
        if c.wall || c.start || c.finish {
            return Ok(false);
        }
        c.weighted = !c.weighted;
        Ok(true)
    }

    /// Flip the vertex flag at `p`.
    pub fn toggle_vertex(&mut self, p: Point) -> Result<bool, GridError> {
        let c = self.checked_mut(p)?;
        c.vertex = !c.vertex;
        Ok(true)
    }

    /// Flip the start flag at `p`. Turning it on moves the start there.
    pub fn toggle_start(&mut self, p: Point) -> Result<bool, GridError> {
        if self.checked_mut(p)?.start {
            self.checked_mut(p)?.start = false;
        } else {
            self.set_start(p)?;
        }
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Restore the search state of every cell, keeping structural flags.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    /// Whether every cell is in its reset state.
    pub fn is_reset(&self) -> bool {
        self.cells.iter().all(Cell::is_reset)
    }
}

impl Default for Grid {
    /// The 20x50 pathfinding board with start (10, 15) and finish (10, 35).
    fn default() -> Self {
        let mut grid = Self::blank(Range::new(0, 0, DEFAULT_ROWS, DEFAULT_COLS));
        for c in grid.cells.iter_mut() {
            c.start = c.pos == DEFAULT_START;
            c.finish = c.pos == DEFAULT_FINISH;
        }
        grid
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    /// Panics if `p` is outside the grid.
    fn index(&self, p: Point) -> &Cell {
        match self.bounds.index(p) {
            Some(i) => &self.cells[i],
            None => panic!("grid: position {p} is out of bounds {}", self.bounds),
        }
    }
}

impl IndexMut<Point> for Grid {
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        match self.bounds.index(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("grid: position {p} is out of bounds {}", self.bounds),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols().max(1) as usize;
        for row in self.cells.chunks(cols) {
            for c in row {
                let ch = if c.start {
                    'S'
                } else if c.finish {
                    'F'
                } else if c.wall {
                    '#'
                } else if c.weighted {
                    '~'
                } else if c.vertex {
                    'o'
                } else if c.visited {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Cell>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    /// Bounds must start at the origin and every cell must sit in its
    /// row-major slot.
    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr { cells, bounds } = repr;
        let (rows, cols) = (bounds.max.row, bounds.max.col);
        let invalid = GridError::InvalidShape { rows, cols };
        if bounds.min != Point::ZERO || shape_len(rows, cols) != Some(cells.len()) {
            return Err(invalid);
        }
        if cells.iter().enumerate().any(|(i, c)| c.pos != bounds.point(i)) {
            return Err(invalid);
        }
        Ok(Self { cells, bounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_shape() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidShape { rows: 0, cols: 5 })
        );
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn default_board() {
        let g = Grid::default();
        assert_eq!(g.rows(), DEFAULT_ROWS);
        assert_eq!(g.cols(), DEFAULT_COLS);
        assert_eq!(g.start(), Some(DEFAULT_START));
        assert_eq!(g.finish(), Some(DEFAULT_FINISH));
        assert!(g.is_reset());
    }

    #[test]
    fn cells_know_their_position() {
        let g = Grid::new(3, 4).unwrap();
        for p in g.bounds() {
            assert_eq!(g[p].pos, p);
        }
    }

    #[test]
    fn walls_and_weights_exclude_each_other() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(0, 1);
        assert_eq!(g.toggle_weight(p), Ok(true));
        assert_eq!(g.toggle_wall(p), Ok(false));
        assert!(!g[p].wall);
        assert_eq!(g.toggle_weight(p), Ok(true));
        assert_eq!(g.toggle_wall(p), Ok(true));
        assert_eq!(g.toggle_weight(p), Ok(false));
        assert!(g[p].wall && !g[p].weighted);
    }

    #[test]
    fn markers_are_never_walls() {
        let mut g = Grid::pathfinding(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(g.toggle_wall(Point::new(0, 0)), Ok(false));
        assert_eq!(g.toggle_weight(Point::new(2, 2)), Ok(false));
    }

    #[test]
    fn set_start_moves_the_marker() {
        let mut g = Grid::new(3, 3).unwrap();
        g.toggle_wall(Point::new(1, 1)).unwrap();
        g.set_start(Point::new(0, 0)).unwrap();
        g.set_start(Point::new(1, 1)).unwrap();
        assert_eq!(g.iter().filter(|c| c.start).count(), 1);
        assert_eq!(g.start(), Some(Point::new(1, 1)));
        assert!(!g[Point::new(1, 1)].wall);
    }

    #[test]
    fn toggle_start_on_and_off() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(1, 0);
        g.toggle_start(p).unwrap();
        assert_eq!(g.start(), Some(p));
        g.toggle_start(p).unwrap();
        assert_eq!(g.start(), None);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(2, 0);
        assert_eq!(g.toggle_wall(p), Err(GridError::OutOfBounds(p)));
        assert_eq!(g.set_finish(p), Err(GridError::OutOfBounds(p)));
        assert!(g.get(p).is_none());
    }

    #[test]
    fn vertices_are_row_major() {
        let mut g = Grid::new(3, 3).unwrap();
        g.toggle_vertex(Point::new(2, 0)).unwrap();
        g.toggle_vertex(Point::new(0, 2)).unwrap();
        g.toggle_vertex(Point::new(1, 1)).unwrap();
        assert_eq!(
            g.vertices(),
            vec![Point::new(0, 2), Point::new(1, 1), Point::new(2, 0)]
        );
    }

    #[test]
    fn reset_clears_search_state_only() {
        let mut g = Grid::new(2, 2).unwrap();
        g.toggle_wall(Point::new(0, 1)).unwrap();
        g[Point::new(1, 1)].distance = 2.0;
        g[Point::new(1, 1)].visited = true;
        assert!(!g.is_reset());
        g.reset();
        assert!(g.is_reset());
        assert!(g[Point::new(0, 1)].wall);
    }

    #[test]
    fn clone_is_independent() {
        let g = Grid::new(2, 2).unwrap();
        let mut h = g.clone();
        h[Point::ZERO].visited = true;
        assert!(!g[Point::ZERO].visited);
    }

    #[test]
    fn display_draws_markers() {
        let mut g = Grid::pathfinding(2, 3, Point::new(0, 0), Point::new(1, 2)).unwrap();
        g.toggle_wall(Point::new(0, 1)).unwrap();
        g.toggle_weight(Point::new(1, 0)).unwrap();
        assert_eq!(g.to_string(), "S# \n~ F\n");
    }
}
