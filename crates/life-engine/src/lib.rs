//! Frontier-based Game of Life engine for the Frontier Life simulation.
//!
//! This crate owns the per-tick algorithm that drives a [`Board`]: the
//! classic B3/S23 rule table, the frontier of cells that can change on the
//! next tick, and the two-phase tick that transitions every frontier cell
//! against one snapshot of cached neighbor counts before rebuilding the
//! frontier from the updated board.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration for board dimensions and seeding.
//! - [`error`] -- Error types for simulator construction.
//! - [`frontier`] -- [`Frontier`]: the set of cells worth examining.
//! - [`rules`] -- The Game of Life transition table.
//! - [`simulator`] -- [`Simulator`]: board ownership and the tick cycle.
//!
//! [`Board`]: life_board::Board

pub mod config;
pub mod error;
pub mod frontier;
pub mod rules;
pub mod simulator;

// Re-export primary types at crate root.
pub use config::{ConfigError, SimulationConfig};
pub use error::EngineError;
pub use frontier::Frontier;
pub use simulator::Simulator;
