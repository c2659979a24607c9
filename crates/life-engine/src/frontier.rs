//! The frontier: cells that can change state on the next tick.
//!
//! A dead cell with no alive neighbor stays dead, so only cells that are
//! alive or adjacent to an alive cell need examining. The frontier is a
//! derived cache over the board, keyed by [`Coordinate`]; it never owns or
//! references cells directly. The board remains the source of truth and
//! [`Frontier::full_rescan`] recomputes the same set from scratch.

use std::collections::BTreeSet;

use life_board::{Board, Cell, Coordinate};

/// A duplicate-free set of board coordinates.
///
/// Iteration is row-major, which keeps tick logs reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    members: BTreeSet<Coordinate>,
}

impl Frontier {
    /// An empty frontier.
    pub const fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Compute the frontier of `board` by examining every cell.
    ///
    /// This is the O(height x width) reference definition: every cell that
    /// is alive or has at least one alive neighbor. It reads live board
    /// state and ignores cached counts.
    pub fn full_rescan(board: &Board) -> Self {
        board
            .cells()
            .filter(|cell| cell.is_alive() || board.neighbor_count(cell.coord()) > 0)
            .map(Cell::coord)
            .collect()
    }

    /// Whether `coord` is a member.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.members.contains(&coord)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the frontier is empty, i.e. the board is extinct.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.members.iter().copied()
    }

    /// Add `coord`, returning `false` if it was already present.
    pub(crate) fn insert(&mut self, coord: Coordinate) -> bool {
        self.members.insert(coord)
    }
}

impl FromIterator<Coordinate> for Frontier {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
