//! Error types for the `life-board` crate.
//!
//! All fallible operations in this crate return [`BoardError`].

use crate::coordinate::Coordinate;

/// Errors that can occur when building or accessing a [`Board`].
///
/// [`Board`]: crate::Board
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// The requested dimensions cannot form a board.
    #[error("invalid board dimensions {height}x{width}: both must be positive")]
    InvalidDimension {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// A coordinate lies outside the board.
    #[error("coordinate {coord} is outside the {height}x{width} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coordinate,
        /// Board height.
        height: usize,
        /// Board width.
        width: usize,
    },

    /// A random seed was given a probability outside `[0, 1]`.
    #[error("alive probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}
