//! Row-major boolean obstacle matrix.

use crate::point::Point;

/// A two-dimensional boolean obstacle layout, `true` = impassable.
///
/// Stored row-major. Used for both the raw unpadded matrix produced by
/// map resolution and the padded matrix owned by a generated instance.
/// Rows and columns may differ (explicit maps are not required to be
/// square); dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Create a grid of the given dimensions with every cell passable.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `p` addresses a cell of this grid.
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < self.rows && p.y >= 0 && (p.y as usize) < self.cols
    }

    fn index(&self, p: Point) -> usize {
        debug_assert!(self.in_bounds(p), "point {p} out of {}x{}", self.rows, self.cols);
        (p.x as usize) * self.cols + (p.y as usize)
    }

    /// Whether the cell at `p` is impassable.
    ///
    /// Out-of-bounds points are reported impassable, so callers probing
    /// an observation window near the edge need no bounds checks.
    pub fn is_obstacle(&self, p: Point) -> bool {
        if !self.in_bounds(p) {
            return true;
        }
        self.cells[self.index(p)]
    }

    /// Mark the cell at `p` impassable. `p` must be in bounds.
    pub fn set_obstacle(&mut self, p: Point) {
        let i = self.index(p);
        self.cells[i] = true;
    }

    /// Number of impassable cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All passable cells in row-major order.
    pub fn free_cells(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.cell_count() - self.obstacle_count());
        for r in 0..self.rows as i32 {
            for c in 0..self.cols as i32 {
                let p = Point::new(r, c);
                if !self.cells[self.index(p)] {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Fraction of cells that are impassable. `0.0` for an empty grid.
    pub fn obstacle_ratio(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.obstacle_count() as f64 / self.cell_count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_grid_is_all_passable() {
        let g = BitGrid::new(3, 5);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.obstacle_count(), 0);
        assert_eq!(g.free_cells().len(), 15);
    }

    #[test]
    fn set_obstacle_is_visible() {
        let mut g = BitGrid::new(2, 2);
        g.set_obstacle(Point::new(1, 0));
        assert!(g.is_obstacle(Point::new(1, 0)));
        assert!(!g.is_obstacle(Point::new(0, 0)));
        assert_eq!(g.obstacle_count(), 1);
    }

    #[test]
    fn out_of_bounds_reads_as_obstacle() {
        let g = BitGrid::new(2, 2);
        assert!(g.is_obstacle(Point::new(-1, 0)));
        assert!(g.is_obstacle(Point::new(0, 2)));
        assert!(g.is_obstacle(Point::new(2, 0)));
    }

    #[test]
    fn obstacle_ratio_counts_fraction() {
        let mut g = BitGrid::new(2, 5);
        g.set_obstacle(Point::new(0, 0));
        g.set_obstacle(Point::new(1, 4));
        assert!((g.obstacle_ratio() - 0.2).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn free_plus_obstacles_covers_grid(
            rows in 1usize..12,
            cols in 1usize..12,
            marks in prop::collection::vec((0usize..12, 0usize..12), 0..20),
        ) {
            let mut g = BitGrid::new(rows, cols);
            for (r, c) in marks {
                if r < rows && c < cols {
                    g.set_obstacle(Point::new(r as i32, c as i32));
                }
            }
            prop_assert_eq!(g.free_cells().len() + g.obstacle_count(), g.cell_count());
            for p in g.free_cells() {
                prop_assert!(!g.is_obstacle(p));
            }
        }
    }
}
