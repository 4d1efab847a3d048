use super::super::{Board, Color, Direction, Move, MoveList, Square};

impl Board {
    /// Adjacent squares that are not ally-occupied and not attacked once the
    /// king stands there.
    ///
    /// This is the only generator that checks legality itself. The probe asks
    /// [`Board::pins_and_checks`] about the destination square directly, so
    /// the cached king square is never touched.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for dir in Direction::ALL_RAYS {
            let Some(to) = from.offset(dir, 1) else {
                continue;
            };
            if matches!(self.piece_at(to), Some((c, _)) if c == color) {
                continue;
            }
            if !self.pins_and_checks(color, to).in_check {
                moves.push(Move::new(from, to, self));
            }
        }
    }
}
