//! Cell records owned by the [`Board`].
//!
//! A cell carries its position, its current state, and a cached neighbor
//! count. The cache is a snapshot: it is only written when the board is
//! asked to refresh it, never as a side effect of a state change, so every
//! transition decision in a tick reads counts from one consistent moment.
//!
//! [`Board`]: crate::Board

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Whether a cell is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// The cell is populated.
    Alive,
    /// The cell is empty.
    #[default]
    Dead,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Fixed for the cell's lifetime.
    coord: Coordinate,
    state: CellState,
    /// Alive neighbors as of the last refresh (0..=8).
    neighbor_count: u8,
}

impl Cell {
    pub(crate) const fn new(coord: Coordinate, state: CellState) -> Self {
        Self {
            coord,
            state,
            neighbor_count: 0,
        }
    }

    /// The cell's position.
    pub const fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The cell's current state.
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Shorthand for `self.state().is_alive()`.
    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// The cached neighbor count from the most recent refresh.
    ///
    /// This is not recomputed on access. A freshly constructed board reports
    /// 0 for every cell until the counts are refreshed.
    pub const fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    pub(crate) const fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) const fn set_neighbor_count(&mut self, count: u8) {
        self.neighbor_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_bool() {
        assert_eq!(CellState::from(true), CellState::Alive);
        assert_eq!(CellState::from(false), CellState::Dead);
        assert_eq!(CellState::default(), CellState::Dead);
    }

    #[test]
    fn state_change_leaves_cached_count_alone() {
        let mut cell = Cell::new(Coordinate::new(1, 1), CellState::Dead);
        cell.set_neighbor_count(3);
        cell.set_state(CellState::Alive);
        assert!(cell.is_alive());
        assert_eq!(cell.neighbor_count(), 3);
        assert_eq!(cell.coord(), Coordinate::new(1, 1));
    }
}
