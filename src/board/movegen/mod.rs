mod kings;
mod knights;
mod pawns;
mod sliders;

use log::debug;

use super::{Board, CheckInfo, Color, Direction, GameStatus, MoveList, Piece, Square};

impl Board {
    fn generate_piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, info, moves),
            Piece::Knight => self.generate_knight_moves(from, color, info, moves),
            Piece::Bishop => {
                self.generate_sliding_moves(from, color, &Direction::DIAGONAL, info, moves);
            }
            Piece::Rook => {
                self.generate_sliding_moves(from, color, &Direction::ORTHOGONAL, info, moves);
            }
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &Direction::ALL_RAYS, info, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Every move for `color` obeying piece movement, occupancy and the pins
    /// in `info`. King moves are already safe; other moves may still ignore
    /// a check.
    pub(crate) fn generate_pseudo_moves(&self, color: Color, info: &CheckInfo) -> MoveList {
        let mut moves = MoveList::new();
        for from in Square::all() {
            if let Some((c, piece)) = self.piece_at(from) {
                if c == color {
                    self.generate_piece_moves(from, color, piece, info, &mut moves);
                }
            }
        }
        moves
    }

    /// Legal moves for the side to move, without touching any cached state.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let color = self.side_to_move();
        let king = self.king_square(color);
        let info = self.pins_and_checks(color, king);

        match info.checks.as_slice() {
            [] => self.generate_pseudo_moves(color, &info),
            [check] => {
                let resolving = check.resolving_squares(king);
                let mut moves = self.generate_pseudo_moves(color, &info);
                moves.retain(|mv| mv.is_king_move() || resolving.contains(&mv.to()));
                moves
            }
            _ => {
                debug!("double check on {color} king at {king}");
                let mut moves = MoveList::new();
                self.generate_king_moves(king, color, &mut moves);
                moves
            }
        }
    }

    /// Legal moves for the side to move, refreshing the cached list and the
    /// checkmate/stalemate status.
    ///
    /// Callers should keep the result until the next apply or undo rather than
    /// querying every frame.
    pub fn generate_moves(&mut self) -> MoveList {
        let moves = self.legal_moves();
        let status = if !moves.is_empty() {
            GameStatus::Ongoing
        } else if self.is_in_check(self.side_to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
        if status.is_over() {
            debug!("{status:?} with {} to move", self.side_to_move());
        }
        self.status = Some(status);
        self.legal_moves = Some(moves.clone());
        moves
    }

    /// In check with no legal moves. Recomputed on every call.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// Not in check with no legal moves. Recomputed on every call.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal-move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
