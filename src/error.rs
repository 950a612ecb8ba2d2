use std::error;
use std::fmt;

use crate::grid::Coordinate;

/// Failures surfaced by the grid and the search entry points.
///
/// An exhausted search is not an error: "no free spot reachable" is encoded in
/// [`crate::algorithms::SearchResult::Unreachable`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A coordinate outside [0, rows) x [0, cols) was queried.
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },
    /// Grid construction saw rows of differing lengths.
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Grid construction saw no cells at all.
    EmptyGrid,
    /// A search was started from a coordinate outside the grid.
    InvalidOrigin {
        origin: Coordinate,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfBounds {
                coordinate,
                rows,
                cols,
            } => write!(
                f,
                "coordinate {} is outside the {}x{} grid",
                coordinate, rows, cols
            ),
            SearchError::NonRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {} has {} cells, expected {}",
                row, found, expected
            ),
            SearchError::EmptyGrid => write!(f, "grid has no cells"),
            SearchError::InvalidOrigin { origin, rows, cols } => write!(
                f,
                "origin {} is outside the {}x{} grid",
                origin, rows, cols
            ),
        }
    }
}

impl error::Error for SearchError {}
