//! Numeric obstacle-matrix interpretation.

use crate::error::MapError;
use warren_core::{BitGrid, Point};

/// Interpret a caller-supplied `{0, 1}` matrix as an obstacle layout.
///
/// The matrix must be rectangular and non-empty; its own dimensions
/// override the configured size. No entity markers exist in this form.
pub(crate) fn from_matrix(matrix: &[Vec<u8>]) -> Result<BitGrid, MapError> {
    let rows = matrix.len();
    if rows == 0 || matrix[0].is_empty() {
        return Err(MapError::EmptyMap);
    }
    let cols = matrix[0].len();
    let mut grid = BitGrid::new(rows, cols);
    for (r, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            return Err(MapError::RaggedRow {
                row: r,
                expected: cols,
                got: row.len(),
            });
        }
        for (c, &value) in row.iter().enumerate() {
            match value {
                0 => {}
                1 => grid.set_obstacle(Point::new(r as i32, c as i32)),
                _ => return Err(MapError::InvalidCellValue { row: r, col: c, value }),
            }
        }
    }
    Ok(grid)
}
