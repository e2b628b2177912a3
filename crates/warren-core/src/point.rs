//! Grid coordinate primitive.

use std::fmt;

/// A cell position in grid coordinates.
///
/// `x` is the row index and `y` is the column index, matching the
/// `(x, y)` reporting order of start and goal lists. Positions handed
/// out by the generator live in padded coordinate space (row 0 is the
/// first row of the border ring, not of the interior).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Point {
    /// Create a point from a row and column index.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point shifted by `delta` on both axes.
    ///
    /// Used to translate unpadded coordinates into padded space.
    pub const fn offset(self, delta: i32) -> Self {
        Self {
            x: self.x + delta,
            y: self.y + delta,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
