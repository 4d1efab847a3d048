use log::{trace, warn};

use super::error::MoveError;
use super::{Board, Move, Piece};

impl Board {
    /// Apply `mv` without checking it against the legal-move set.
    ///
    /// The caller must have taken `mv` from the latest [`Board::generate_moves`]
    /// result; anything else leaves the position in an undefined (though
    /// memory-safe) state. Use [`Board::try_make_move`] for checked input.
    pub fn make_move(&mut self, mv: Move) {
        let moving = mv.piece_moved();
        self.set_contents(mv.to(), moving);
        self.set_contents(mv.from(), None);
        if let Some((color, Piece::King)) = moving {
            self.set_king_square(color, mv.to());
        }
        self.white_to_move = !self.white_to_move;
        self.history.push(mv);
        self.invalidate_cache();
        trace!("applied {mv}, {} to move", self.side_to_move());
    }

    /// Apply `mv` if it is a member of the current legal-move set.
    ///
    /// Membership is by square pair, and the listed move (with its fresh piece
    /// snapshot) is the one applied. The legal set is recomputed if no query
    /// has been made since the last change.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let listed = match &self.legal_moves {
            Some(cached) => cached.find(mv.from(), mv.to()),
            None => self.generate_moves().find(mv.from(), mv.to()),
        };
        match listed {
            Some(legal) => {
                self.make_move(legal);
                Ok(())
            }
            None => {
                warn!("rejected illegal move {mv}");
                Err(MoveError::NotLegal {
                    notation: mv.notation(),
                })
            }
        }
    }

    /// Take back the most recent move, returning it.
    ///
    /// Restores exactly the two squares the move touched. Returns `None` and
    /// leaves the board untouched when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(mv) = self.history.pop() else {
            warn!("undo requested with empty history");
            return None;
        };
        self.set_contents(mv.from(), mv.piece_moved());
        self.set_contents(mv.to(), mv.piece_captured());
        if let Some((color, Piece::King)) = mv.piece_moved() {
            self.set_king_square(color, mv.from());
        }
        self.white_to_move = !self.white_to_move;
        self.invalidate_cache();
        trace!("undid {mv}, {} to move", self.side_to_move());
        Some(mv)
    }
}
