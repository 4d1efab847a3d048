//! Chess position and rules engine.
//!
//! The board is an 8x8 grid of optional (color, piece) pairs with a cached
//! square for each king and a history of applied moves. Legal moves are
//! derived per query from a pin/check snapshot of the side to move.
//! Castling, en passant and promotion are not part of these rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.status(), Some(GameStatus::Ongoing));
//!
//! board.make_move(moves[0]);
//! board.undo_move();
//! assert_eq!(board.history().len(), 0);
//! ```

mod builder;
mod check;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::{Check, CheckInfo, CheckLine, Pin};
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use state::{Board, GameStatus, SquareContents};
pub use types::{Color, Direction, Move, MoveList, Piece, Square};

pub(crate) use types::{file_to_column, rank_to_row};
