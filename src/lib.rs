//! A two player game of 'Connect 4' for the terminal
//!
//! Players take turns dropping pieces into the columns of a 7x6 grid.
//! The first to line up four of their pieces horizontally, vertically
//! or diagonally wins, and a full grid without a line is a draw.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::{grid::Grid, player::Mark};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut grid = Grid::new();
//! for _ in 0..3 {
//!     grid.drop_piece(3, Mark::Solid)?;
//! }
//! let last_move = grid.drop_piece(3, Mark::Solid)?;
//!
//! assert!(grid.four_in_a_row(last_move.column, last_move.row, Mark::Solid));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod grid;

pub mod player;

pub mod round;

pub mod console;


pub use error::{DropError, MoveError};
pub use grid::{Grid, Move};
pub use player::{Mark, Player};
pub use round::{Announcer, ColumnSource, Outcome, Round, Seat, State};

/// The width of the game grid in columns
pub const WIDTH: usize = 7;

/// The height of the game grid in rows
pub const HEIGHT: usize = 6;

/// The number of aligned pieces needed to win
pub const ALIGNMENT: usize = 4;

// a winning line has to fit on the grid in every direction
const_assert!(ALIGNMENT <= WIDTH && ALIGNMENT <= HEIGHT);
