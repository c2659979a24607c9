//! Grid positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable `(row, col)` position on the board.
///
/// Coordinates compare by value and order row-major, so sorted collections
/// of coordinates iterate the board top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Create a coordinate from a row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The row index.
    pub const fn row(self) -> usize {
        self.row
    }

    /// The column index.
    pub const fn col(self) -> usize {
        self.col
    }

    /// Shift this coordinate by a signed offset.
    ///
    /// Returns `None` when either component would go below zero or overflow.
    /// The result is not checked against any board bounds.
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
