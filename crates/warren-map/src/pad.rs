//! Border padding and coordinate framing.

use warren_core::{BitGrid, Point};

/// Wrap `grid` in a border of permanent obstacles of width `obs_radius`.
///
/// The result is `(rows + 2r) x (cols + 2r)` with the interior copied
/// unchanged. The padding lets an agent's local observation window of
/// radius `r` be read without bounds checks anywhere in the interior.
/// Entity coordinates extracted from an explicit map must be shifted
/// into this frame with [`Point::offset`]`(r)`.
pub fn pad(grid: &BitGrid, obs_radius: u32) -> BitGrid {
    let r = obs_radius as i32;
    let mut padded = BitGrid::new(
        grid.rows() + 2 * obs_radius as usize,
        grid.cols() + 2 * obs_radius as usize,
    );
    for row in 0..padded.rows() as i32 {
        for col in 0..padded.cols() as i32 {
            let inner = Point::new(row - r, col - r);
            let in_interior = grid.in_bounds(inner);
            if !in_interior || grid.is_obstacle(inner) {
                padded.set_obstacle(Point::new(row, col));
            }
        }
    }
    padded
}
