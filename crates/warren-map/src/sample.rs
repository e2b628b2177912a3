//! Density-based obstacle sampling.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use warren_core::{BitGrid, Point};

/// Bernoulli-sample a `size x size` obstacle layout.
///
/// Each cell is independently impassable with probability `density`.
/// The caller owns the RNG; the same seeded sequence drives both this
/// sampling and the subsequent entity placement, so reproducibility
/// spans the whole generation call. `density` must already be
/// validated to lie in `[0, 1]`.
pub(crate) fn sample_obstacles(size: u32, density: f64, rng: &mut ChaCha8Rng) -> BitGrid {
    let n = size as usize;
    let mut grid = BitGrid::new(n, n);
    for r in 0..size as i32 {
        for c in 0..size as i32 {
            if rng.random_bool(density) {
                grid.set_obstacle(Point::new(r, c));
            }
        }
    }
    grid
}
