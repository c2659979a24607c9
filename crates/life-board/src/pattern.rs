//! Named classic Life patterns.
//!
//! Each pattern is a list of alive cell offsets relative to its top-left
//! corner. Place one on a board with [`Pattern::seed_at`].

use crate::cell::CellState;
use crate::coordinate::Coordinate;
use crate::seed;

/// A named configuration of alive cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Lowercase pattern name.
    pub name: &'static str,
    /// Alive `(row, col)` offsets from the pattern origin.
    pub cells: &'static [(usize, usize)],
}

/// Every built-in pattern.
pub const PATTERNS: &[Pattern] = &[
    // Still life.
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    // Period-2 oscillators.
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
        ],
    },
    // Spaceship, travels down-right.
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

impl Pattern {
    /// Look up a built-in pattern, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static Self> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box of the pattern as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row.saturating_add(1)), cols.max(col.saturating_add(1)))
        })
    }

    /// Absolute coordinates of the pattern's cells with its top-left corner
    /// at `origin`. Cells whose position would overflow are skipped.
    pub fn cells_at(&self, origin: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().filter_map(move |&(row, col)| {
            Some(Coordinate::new(
                origin.row().checked_add(row)?,
                origin.col().checked_add(col)?,
            ))
        })
    }

    /// A seed that is alive exactly where this pattern is, placed at
    /// `origin`, and dead everywhere else.
    pub fn seed_at(&self, origin: Coordinate) -> impl Fn(Coordinate) -> CellState {
        seed::from_coordinates(self.cells_at(origin))
    }
}
