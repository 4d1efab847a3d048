//! Core chess types.
//!
//! This module contains the value types shared by the position and the rules:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `Direction` - step vectors for rays and leapers
//! - `Move` and `MoveList` - ply representation

mod direction;
mod moves;
mod piece;
mod square;

pub use direction::Direction;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use square::{file_to_column, rank_to_row};
