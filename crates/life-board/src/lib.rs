//! Bounded board model for the Frontier Life simulation.
//!
//! This crate is the leaf of the workspace. It owns the fixed-size matrix of
//! cells and the pure neighbor-counting function, and knows nothing about
//! the Game of Life rules. Rule enforcement lives in `life-engine`.
//!
//! # Modules
//!
//! - [`board`] -- [`Board`]: flat row-major cell storage with bounds-checked
//!   access and neighbor counting on a non-wrapping grid.
//! - [`cell`] -- [`Cell`] and [`CellState`]: one grid position with its
//!   cached neighbor count.
//! - [`coordinate`] -- [`Coordinate`]: immutable `(row, col)` positions.
//! - [`error`] -- Error types for board construction and access.
//! - [`pattern`] -- Named classic Life patterns usable as deterministic seeds.
//! - [`seed`] -- Seed functions that assign each cell its initial state.

pub mod board;
pub mod cell;
pub mod coordinate;
pub mod error;
pub mod pattern;
pub mod seed;

// Re-export primary types at crate root.
pub use board::Board;
pub use cell::{Cell, CellState};
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use pattern::{PATTERNS, Pattern};
