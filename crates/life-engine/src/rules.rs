//! Conway's Game of Life transition rule (B3/S23).
//!
//! | current | neighbors | next  |
//! |---------|-----------|-------|
//! | Alive   | < 2       | Dead  |
//! | Alive   | 2 or 3    | Alive |
//! | Alive   | > 3       | Dead  |
//! | Dead    | 3         | Alive |
//! | Dead    | not 3     | Dead  |

use life_board::CellState;

/// The state a cell takes on the next tick.
///
/// Depends only on the cell's own state and its neighbor count, never on
/// any other cell, so frontier members may be transitioned in any order.
pub const fn next_state(state: CellState, neighbor_count: u8) -> CellState {
    match (state, neighbor_count) {
        (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
