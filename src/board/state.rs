use super::{Color, Move, MoveList, Piece, Square};

/// Contents of one square.
pub type SquareContents = Option<(Color, Piece)>;

/// Outcome of the most recent legal-move query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// The position aggregate: grid, side to move, king squares and history.
///
/// `white_king` and `black_king` are derived from the grid but are never
/// recomputed by scanning it after construction. `make_move` and `undo_move`
/// are the only places that move them.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[SquareContents; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) history: Vec<Move>,
    // Cleared by every apply/undo.
    pub(crate) legal_moves: Option<MoveList>,
    pub(crate) status: Option<GameStatus>,
}

impl Board {
    /// Standard initial array, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (column, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, column), Color::Black, *piece);
            board.set_piece(Square(1, column), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, column), Color::White, Piece::Pawn);
            board.set_piece(Square(7, column), Color::White, *piece);
        }
        board.white_king = Square(7, 4);
        board.black_king = Square(0, 4);
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            white_to_move: true,
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            history: Vec::new(),
            legal_moves: None,
            status: None,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    pub(crate) fn set_contents(&mut self, sq: Square, contents: SquareContents) {
        self.squares[sq.0][sq.1] = contents;
    }

    /// What stands on `sq`, if anything.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> SquareContents {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Read-only view of the 8x8 grid, indexed `[row][column]`.
    #[must_use]
    pub fn squares(&self) -> &[[SquareContents; 8]; 8] {
        &self.squares
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Cached square of `color`'s king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status from the most recent legal-move query, or `None` if the
    /// position changed since then.
    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.status
    }

    /// Cached flag: true only if the last legal-move query found checkmate.
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.status == Some(GameStatus::Checkmate)
    }

    /// Cached flag: true only if the last legal-move query found stalemate.
    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.status == Some(GameStatus::Stalemate)
    }

    pub(crate) fn invalidate_cache(&mut self) {
        self.legal_moves = None;
        self.status = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
