use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{file_to_column, rank_to_row, Board, BoardBuilder, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only the placement and side-to-move fields carry meaning. Castling,
    /// en passant and clock fields may follow and are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = BoardBuilder::new();

        // Placement lists rank 8 first, which is row 0.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() < 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (row, rank_str) in ranks.into_iter().enumerate() {
            if row >= 8 {
                return Err(FenError::InvalidRank { rank: row });
            }
            let mut column = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    column += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if column >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: column + 1,
                    });
                }
                builder = builder.piece(Square(row, column), color, piece);
                column += 1;
            }
            if column > 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: column,
                });
            }
            if column < 8 {
                return Err(FenError::TooFewFiles {
                    rank: row,
                    files: column,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        builder.side_to_move(side).build()
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// The castling and en passant fields are always `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut out = String::new();
            let mut empty = 0;
            for column in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, column)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        format!("{} {} - - 0 1", rows.join("/"), active)
    }

    /// Parse a square-pair move such as "e2e4" against the current board.
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |file: char, rank: char| {
            match (file_to_column(file), rank_to_row(rank)) {
                (Some(column), Some(row)) => Ok(Square(row, column)),
                _ => Err(MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                }),
            }
        };
        let from = square(chars[0], chars[1])?;
        let to = square(chars[2], chars[3])?;

        let legal = match &self.legal_moves {
            Some(cached) => cached.find(from, to),
            None => self.generate_moves().find(from, to),
        };
        legal.ok_or_else(|| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
    }

    /// Parse a square-pair move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_notation("e2e4").unwrap();
    /// board.make_move_notation("e7e5").unwrap();
    /// assert_eq!(board.history().len(), 2);
    /// ```
    pub fn make_move_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
