use std::fmt;

use crate::error::SearchError;

/// A (row, col) cell address in a parking lot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(&self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Occupied,
}

/// Rectangular occupancy map of a parking lot.
///
/// Rows all have equal length (checked at construction) and every query is
/// bounds-checked. A grid never changes while a search runs over it; callers
/// that need a variant (e.g. the origin marked occupied) get a new grid from
/// [`Grid::with_occupied`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self, SearchError> {
        let rows = cells.len();
        if rows == 0 || cells[0].is_empty() {
            return Err(SearchError::EmptyGrid);
        }
        let cols = cells[0].len();
        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(SearchError::NonRectangular {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Build a grid from an ASCII sketch: '.' is free, '#' is occupied.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(art: &str) -> Result<Self, SearchError> {
        let cells = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| if c == '#' { Cell::Occupied } else { Cell::Free })
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    pub fn cell(&self, c: Coordinate) -> Result<Cell, SearchError> {
        if !self.contains(c) {
            return Err(SearchError::OutOfBounds {
                coordinate: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[c.row][c.col])
    }

    pub fn is_free(&self, c: Coordinate) -> Result<bool, SearchError> {
        Ok(self.cell(c)? == Cell::Free)
    }

    pub fn is_occupied(&self, c: Coordinate) -> Result<bool, SearchError> {
        Ok(self.cell(c)? == Cell::Occupied)
    }

    /// A copy of this grid with `c` marked occupied. The receiver is untouched.
    pub fn with_occupied(&self, c: Coordinate) -> Result<Grid, SearchError> {
        if !self.contains(c) {
            return Err(SearchError::OutOfBounds {
                coordinate: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut cells = self.cells.clone();
        cells[c.row][c.col] = Cell::Occupied;
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    /// In-bounds orthogonal neighbors of `c`, always in the order
    /// up, down, left, right. Several callers depend on this order to pick
    /// among equally near spots, so it must not change.
    pub fn neighbors(&self, c: Coordinate) -> Vec<Coordinate> {
        debug_assert!(self.contains(c));
        let mut neighbors = Vec::with_capacity(4);
        if c.row > 0 {
            neighbors.push(Coordinate::new(c.row - 1, c.col));
        }
        if c.row + 1 < self.rows {
            neighbors.push(Coordinate::new(c.row + 1, c.col));
        }
        if c.col > 0 {
            neighbors.push(Coordinate::new(c.row, c.col - 1));
        }
        if c.col + 1 < self.cols {
            neighbors.push(Coordinate::new(c.row, c.col + 1));
        }
        neighbors
    }

    /// Count of free cells left in the lot.
    pub fn free_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Free)
            .count()
    }
}
