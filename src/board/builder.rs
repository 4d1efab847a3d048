//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.legal_moves().len(), 7);
//! ```

use super::error::FenError;
use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for sq in Square::all() {
            if let Some((color, piece)) = board.piece_at(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    ///
    /// Fails on a piece off the board, unless each color has exactly one
    /// king, or when the side not to move is in check. The king squares found
    /// here seed the board's king cache; nothing scans for kings afterwards.
    pub fn build(self) -> Result<Board, FenError> {
        let mut board = Board::empty();
        let mut kings: [Option<Square>; 2] = [None, None];

        for (square, color, piece) in self.pieces {
            let square = Square::try_from((square.row(), square.column()))?;
            if piece == Piece::King {
                let slot = &mut kings[usize::from(color == Color::Black)];
                if slot.is_some() {
                    return Err(FenError::ExtraKing { color });
                }
                *slot = Some(square);
            }
            board.set_piece(square, color, piece);
        }

        for color in Color::BOTH {
            let king = kings[usize::from(color == Color::Black)]
                .ok_or(FenError::MissingKing { color })?;
            board.set_king_square(color, king);
        }
        board.white_to_move = self.side_to_move == Color::White;

        let waiting = self.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::SquareError;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position()
            .build()
            .expect("valid position");
        let standard = Board::new();

        assert_eq!(built.to_fen(), standard.to_fen());
        assert_eq!(built.king_square(Color::White), Square(7, 4));
        assert_eq!(built.king_square(Color::Black), Square(0, 4));
    }

    #[test]
    fn test_kings_only() {
        let board = BoardBuilder::new()
            .piece(Square(3, 2), Color::White, Piece::King)
            .piece(Square(0, 7), Color::Black, Piece::King)
            .build()
            .expect("valid position");

        assert_eq!(board.king_square(Color::White), Square(3, 2));
        assert_eq!(board.king_square(Color::Black), Square(0, 7));
        assert!(board.piece_at(Square(0, 0)).is_none());
    }

    #[test]
    fn test_missing_king_rejected() {
        let result = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .build();
        assert_eq!(
            result.err(),
            Some(FenError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_extra_king_rejected() {
        let result = BoardBuilder::starting_position()
            .piece(Square(4, 4), Color::White, Piece::King)
            .build();
        assert_eq!(
            result.err(),
            Some(FenError::ExtraKing {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_off_board_square_rejected() {
        let result = BoardBuilder::starting_position()
            .piece(Square(8, 0), Color::White, Piece::Rook)
            .build();
        assert_eq!(
            result.err(),
            Some(FenError::InvalidSquare(SquareError::RowOutOfBounds { row: 8 }))
        );

        let result = BoardBuilder::starting_position()
            .piece(Square(3, 9), Color::Black, Piece::Knight)
            .build();
        assert_eq!(
            result.err(),
            Some(FenError::InvalidSquare(SquareError::ColumnOutOfBounds {
                column: 9
            }))
        );
    }

    #[test]
    fn test_waiting_side_in_check_rejected() {
        // Rook on e1 sees the e8 king with White to move.
        let builder = BoardBuilder::new()
            .piece(Square(7, 5), Color::White, Piece::King)
            .piece(Square(7, 4), Color::White, Piece::Rook)
            .piece(Square(0, 4), Color::Black, Piece::King);
        assert_eq!(
            builder.clone().build().err(),
            Some(FenError::OpponentInCheck {
                color: Color::Black
            })
        );

        // Same placement is an ordinary check when Black is to move.
        let board = builder
            .side_to_move(Color::Black)
            .build()
            .expect("valid position");
        assert!(board.is_in_check(Color::Black));
        assert!(board
            .legal_moves()
            .iter()
            .all(|mv| mv.piece_captured() != Some((Color::White, Piece::King))));
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::starting_position()
            .side_to_move(Color::Black)
            .build()
            .expect("valid position");

        assert!(!board.white_to_move());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 0))
            .build()
            .expect("valid position");

        assert!(board.piece_at(Square(7, 0)).is_none());
        assert!(board.piece_at(Square(7, 1)).is_some());
    }
}
