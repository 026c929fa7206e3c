//! Error types for grid and round operations

use thiserror::Error;

/// A piece could not be dropped into the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DropError {
    /// The column has no empty slot left, recoverable by picking another column
    #[error("Invalid move, column {} full", .0 + 1)]
    ColumnFull(usize),

    /// The column index lies outside the grid
    #[error("Invalid move, column index {0} out of range")]
    InvalidColumn(usize),
}

/// A move could not be applied to a round
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Drop(#[from] DropError),

    #[error("Invalid move, the round is already over")]
    RoundOver,
}
