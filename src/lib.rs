pub mod board;

pub use board::{
    Board, BoardBuilder, Color, FenError, GameStatus, Move, MoveError, MoveList, MoveParseError,
    Piece, Square, SquareError,
};
