//! Map parse errors.

use std::error::Error;
use std::fmt;

/// An explicit map (numeric or textual) is malformed.
///
/// Detected during map resolution, before any placement attempt, and
/// deterministic for a given map; the generation loop never retries
/// these. Row and column indices refer to the trimmed map, zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The map has no rows or no columns.
    EmptyMap,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
    /// A numeric matrix cell holds a value other than 0 or 1.
    InvalidCellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// A textual map character is not in the symbol table.
    UnknownSymbol {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The rejected character.
        symbol: char,
    },
    /// The same agent marker appears more than once.
    DuplicateMarker {
        /// The repeated marker.
        symbol: char,
        /// Row of the second occurrence.
        row: usize,
        /// Column of the second occurrence.
        col: usize,
    },
    /// An agent marker appears without its case-matched counterpart.
    UnmatchedMarker {
        /// The marker that was found.
        found: char,
        /// The counterpart that is missing.
        missing: char,
    },
    /// A marker's letter index is not below the inferred agent count.
    ///
    /// Agent letters must be contiguous from `a`; a map using `c`
    /// without `a` and `b` declares fewer agents than `c` indexes.
    MarkerOutOfRange {
        /// The offending marker.
        symbol: char,
        /// Row of the marker.
        row: usize,
        /// Column of the marker.
        col: usize,
        /// Number of agents the map declares.
        agents: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map has no cells"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "row {row} has {got} cells, expected {expected}")
            }
            Self::InvalidCellValue { row, col, value } => {
                write!(f, "cell ({row}, {col}) must be 0 or 1, got {value}")
            }
            Self::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol '{symbol}' at ({row}, {col})")
            }
            Self::DuplicateMarker { symbol, row, col } => {
                write!(f, "marker '{symbol}' appears again at ({row}, {col})")
            }
            Self::UnmatchedMarker { found, missing } => {
                write!(f, "marker '{found}' has no matching '{missing}'")
            }
            Self::MarkerOutOfRange {
                symbol,
                row,
                col,
                agents,
            } => {
                write!(
                    f,
                    "marker '{symbol}' at ({row}, {col}) indexes past the {agents} agent(s) the map declares"
                )
            }
        }
    }
}

impl Error for MapError {}
