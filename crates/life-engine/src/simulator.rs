//! The simulator: a board, its frontier, and the tick cycle.
//!
//! Each [`Simulator::tick`] runs two strictly ordered phases:
//!
//! 1. **Transition** -- every frontier cell takes the state given by
//!    [`rules::next_state`] applied to its current state and its *cached*
//!    neighbor count. Changing a cell's state never touches any cached
//!    count, so every decision in this phase reads the same snapshot and
//!    the iteration order is irrelevant.
//!
//! 2. **Rebuild** -- for every old frontier member that is alive after the
//!    transition, refresh the cached count of the cell and of each of its
//!    in-bounds neighbors against the updated board and collect them into
//!    a new frontier, which replaces the old one. Work is bounded by
//!    `9 x |new frontier|`.
//!
//! The rebuild only starts from old frontier members. That is enough: a
//! cell alive after the transition was either alive before or was born,
//! and both cases put it in the old frontier. A cell that just died with no
//! alive neighbor drops out, which matches [`Frontier::full_rescan`].
//!
//! Cached counts are written only by frontier initialization and the
//! rebuild phase.

use life_board::{Board, CellState, Coordinate, Pattern, seed};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::frontier::Frontier;
use crate::rules;

/// Births and deaths produced by one transition phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Transition {
    births: usize,
    deaths: usize,
}

/// A Game of Life simulation over one bounded board.
///
/// Holds only the board and the frontier. The frontier is initialized as
/// part of construction, so a simulator can always be ticked. `tick` takes
/// `&mut self`, which rules out overlapping ticks on the same simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    board: Board,
    frontier: Frontier,
}

impl Simulator {
    /// Build a `height x width` board seeded by `seed` and initialize its
    /// frontier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Board`] if the dimensions are invalid.
    pub fn new<F>(height: usize, width: usize, seed: F) -> Result<Self, EngineError>
    where
        F: FnMut(Coordinate) -> CellState,
    {
        let board = Board::new(height, width, seed)?;
        Ok(Self::from_board(board))
    }

    /// Take ownership of an existing board and initialize its frontier.
    ///
    /// Any cached counts already on the board are overwritten.
    pub fn from_board(board: Board) -> Self {
        let mut simulator = Self {
            board,
            frontier: Frontier::new(),
        };
        simulator.initialize_frontier();
        info!(
            height = simulator.board.height(),
            width = simulator.board.width(),
            population = simulator.board.population(),
            frontier = simulator.frontier.len(),
            "Simulator initialized"
        );
        simulator
    }

    /// Build a simulator from a validated configuration.
    ///
    /// A configured pattern takes precedence over random seeding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration is invalid, or
    /// [`EngineError::Board`] if the board cannot be built.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let (height, width) = (config.board.height, config.board.width);
        match config.seed.pattern.as_deref().and_then(Pattern::by_name) {
            Some(pattern) => Self::new(height, width, pattern.seed_at(config.seed.pattern_origin)),
            None => Self::new(
                height,
                width,
                seed::uniform_random(config.seed.rng_seed, config.seed.alive_probability)?,
            ),
        }
    }

    /// The board, for reading cell state back out.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current frontier.
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.board.population()
    }

    /// Advance the board by one generation.
    pub fn tick(&mut self) {
        let transition = self.transition();
        self.rebuild_frontier();
        debug!(
            births = transition.births,
            deaths = transition.deaths,
            frontier = self.frontier.len(),
            "Tick complete"
        );
    }

    /// Scan the whole board once, caching the count of every cell and
    /// admitting those that are alive or have an alive neighbor.
    fn initialize_frontier(&mut self) {
        let mut frontier = Frontier::new();
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                let coord = Coordinate::new(row, col);
                let Ok(count) = self.board.refresh_neighbor_count(coord) else {
                    continue;
                };
                if count > 0 || self.board.is_alive(coord) {
                    frontier.insert(coord);
                }
            }
        }
        self.frontier = frontier;
    }

    fn transition(&mut self) -> Transition {
        let mut transition = Transition::default();
        for coord in self.frontier.iter() {
            let Ok(cell) = self.board.cell_at(coord) else {
                continue;
            };
            let current = cell.state();
            let next = rules::next_state(current, cell.neighbor_count());
            if next == current || self.board.set_state(coord, next).is_err() {
                continue;
            }
            match next {
                CellState::Alive => transition.births = transition.births.saturating_add(1),
                CellState::Dead => transition.deaths = transition.deaths.saturating_add(1),
            }
        }
        transition
    }

    fn rebuild_frontier(&mut self) {
        let mut next = Frontier::new();
        for coord in self.frontier.iter() {
            if !self.board.is_alive(coord) {
                continue;
            }
            admit(&mut self.board, &mut next, coord);
            for neighbor in self.board.neighbors(coord) {
                if !next.contains(neighbor) {
                    admit(&mut self.board, &mut next, neighbor);
                }
            }
        }
        self.frontier = next;
    }
}

/// Refresh the cached count of `coord` and add it to `frontier`.
fn admit(board: &mut Board, frontier: &mut Frontier, coord: Coordinate) {
    if board.refresh_neighbor_count(coord).is_ok() {
        frontier.insert(coord);
    }
}
