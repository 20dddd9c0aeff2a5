//! A Connect 4 opponent driven by depth-limited minimax search
//!
//! The computer scores every legal column with an alpha-beta pruned game
//! tree search and plays the leftmost column with the best outcome.
//! Positions are only ever scored as a win, a loss or neither, so playing
//! strength comes entirely from the search depth.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Player, StandardBoard}, solver::best_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = StandardBoard::new();
//! board.drop(3, Player::Human)?;
//!
//! let column = best_move(&mut board, 2);
//! assert_eq!(column, Some(0));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod solver;

pub mod game;


pub use board::{Board, Cell, Player, StandardBoard};
pub use error::{InputError, MoveError};
pub use game::{Game, GameState, Input};
pub use solver::Solver;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// Plies searched after the computer's own candidate move
pub const DEFAULT_DEPTH: usize = 2;

// columns are entered and recorded as single digits
const_assert!(WIDTH >= 4 && WIDTH <= 9);
const_assert!(HEIGHT >= 4);
const_assert!(DEFAULT_DEPTH >= 1);
