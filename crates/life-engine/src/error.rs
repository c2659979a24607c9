//! Error types for the `life-engine` crate.
//!
//! Errors only arise while building a [`Simulator`]. Once constructed, a
//! simulator's tick is total.
//!
//! [`Simulator`]: crate::Simulator

use life_board::BoardError;

use crate::config::ConfigError;

/// Errors that can occur while constructing a simulator.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Board construction or seeding failed.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// The configuration was unreadable or invalid.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}
