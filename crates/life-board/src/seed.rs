//! Seed functions for [`Board::new`].
//!
//! A seed maps each [`Coordinate`] to its initial [`CellState`]. The board
//! calls it once per cell in row-major order.
//!
//! # Determinism
//!
//! [`uniform_random`] draws from a `SmallRng` seeded with a caller-supplied
//! `u64`, so the same seed, probability, and dimensions always produce the
//! same board. The reference front end used an unseeded 50/50 split;
//! passing `0.5` reproduces that distribution.
//!
//! [`Board::new`]: crate::Board::new

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState;
use crate::coordinate::Coordinate;
use crate::error::BoardError;

/// Probability used by the reference 50/50 seeding.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// Seed that leaves every cell dead.
pub const fn all_dead(_coord: Coordinate) -> CellState {
    CellState::Dead
}

/// Seed where each cell is independently alive with `alive_probability`.
///
/// # Errors
///
/// Returns [`BoardError::InvalidProbability`] if `alive_probability` is NaN
/// or outside `[0, 1]`.
pub fn uniform_random(
    rng_seed: u64,
    alive_probability: f64,
) -> Result<impl FnMut(Coordinate) -> CellState, BoardError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(BoardError::InvalidProbability(alive_probability));
    }
    let mut rng = SmallRng::seed_from_u64(rng_seed);
    Ok(move |_coord: Coordinate| CellState::from(rng.random_bool(alive_probability)))
}

/// Seed that is alive exactly at the given coordinates.
///
/// Coordinates that fall outside the board being built are ignored.
pub fn from_coordinates<I>(alive: I) -> impl Fn(Coordinate) -> CellState
where
    I: IntoIterator<Item = Coordinate>,
{
    let alive: BTreeSet<Coordinate> = alive.into_iter().collect();
    move |coord| CellState::from(alive.contains(&coord))
}
