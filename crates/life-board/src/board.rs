//! The fixed-size cell matrix.
//!
//! [`Board`] stores `height * width` cells in a flat row-major vector and
//! exposes bounds-checked access. The grid does not wrap: cells on an edge
//! or corner simply have fewer neighbor positions.
//!
//! # Invariants
//!
//! - Dimensions are positive and fixed at construction.
//! - The cell at vector index `row * width + col` has coordinate
//!   `(row, col)`.
//! - No position outside `[0, height) x [0, width)` is ever indexed; every
//!   neighbor iteration filters positions against the bounds first.

use crate::cell::{Cell, CellState};
use crate::coordinate::Coordinate;
use crate::error::BoardError;

/// Relative positions of the eight Moore neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded, non-wrapping Game of Life board.
///
/// The board exclusively owns its cells. It never evaluates Life rules;
/// callers decide state changes and the board only stores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major cell storage, `height * width` long.
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board, asking `seed` for every cell's initial state.
    ///
    /// `seed` is called once per cell in row-major order, so a seed backed
    /// by a deterministic RNG always yields the same board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if either dimension is zero
    /// or `height * width` overflows `usize`.
    pub fn new<F>(height: usize, width: usize, mut seed: F) -> Result<Self, BoardError>
    where
        F: FnMut(Coordinate) -> CellState,
    {
        let invalid = BoardError::InvalidDimension { height, width };
        if height == 0 || width == 0 {
            return Err(invalid);
        }
        let len = height.checked_mul(width).ok_or(invalid)?;

        let mut cells = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                let coord = Coordinate::new(row, col);
                cells.push(Cell::new(coord, seed(coord)));
            }
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a board has at least one cell.
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies within `[0, height) x [0, width)`.
    pub const fn contains(&self, coord: Coordinate) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    /// Return the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is outside the board.
    pub fn cell_at(&self, coord: Coordinate) -> Result<&Cell, BoardError> {
        self.index_of(coord)
            .and_then(|idx| self.cells.get(idx))
            .ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Overwrite the state of the cell at `coord`.
    ///
    /// The cached neighbor count of this cell and its neighbors is left as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is outside the board.
    pub fn set_state(&mut self, coord: Coordinate, state: CellState) -> Result<(), BoardError> {
        self.cell_mut(coord)?.set_state(state);
        Ok(())
    }

    /// Whether the cell at `coord` is alive. Positions off the board read
    /// as dead.
    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.cell_at(coord).is_ok_and(Cell::is_alive)
    }

    /// The in-bounds neighbor positions of `coord`, excluding `coord` itself.
    ///
    /// Interior cells have 8, edge cells 5, corner cells 3, and the single
    /// cell of a 1x1 board has none.
    ///
    /// The iterator does not borrow the board, so callers may mutate cells
    /// while walking a neighborhood.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + use<> {
        let (height, width) = (self.height, self.width);
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(move |neighbor| neighbor.row() < height && neighbor.col() < width)
    }

    /// Count the alive cells among the in-bounds neighbors of `coord`.
    ///
    /// Pure read: it neither consults nor updates any cached count.
    pub fn neighbor_count(&self, coord: Coordinate) -> u8 {
        self.neighbors(coord).fold(0_u8, |count, neighbor| {
            if self.is_alive(neighbor) {
                count.saturating_add(1)
            } else {
                count
            }
        })
    }

    /// Recount the alive neighbors of `coord` against the current board and
    /// store the result in that cell's cache.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is outside the board.
    pub fn refresh_neighbor_count(&mut self, coord: Coordinate) -> Result<u8, BoardError> {
        let count = self.neighbor_count(coord);
        self.cell_mut(coord)?.set_neighbor_count(count);
        Ok(count)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cells that are currently alive, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|cell| cell.is_alive())
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.alive_cells().count()
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        coord.row().checked_mul(self.width)?.checked_add(coord.col())
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Result<&mut Cell, BoardError> {
        let err = self.out_of_bounds(coord);
        self.index_of(coord)
            .and_then(|idx| self.cells.get_mut(idx))
            .ok_or(err)
    }

    const fn out_of_bounds(&self, coord: Coordinate) -> BoardError {
        BoardError::OutOfBounds {
            coord,
            height: self.height,
            width: self.width,
        }
    }
}
