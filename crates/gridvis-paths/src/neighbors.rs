use gridvis_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the up-to-four axis-aligned neighbours of a cell that lie
/// inside the grid and pass a filter, reusing one buffer between calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-grid neighbours of `p` in the order up, down, left, right,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, grid: &Grid, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if grid.contains(n) && keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let g = Grid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.cardinal(&g, Point::new(0, 0), |_| true),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn filter_applies() {
        let g = Grid::new(3, 3).unwrap();
        let mut nb = Neighbors::new();
        let n = nb.cardinal(&g, Point::new(1, 1), |p| p.row == 1);
        assert_eq!(n, &[Point::new(1, 0), Point::new(1, 2)]);
    }
}
