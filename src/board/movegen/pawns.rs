use super::super::{Board, CheckInfo, Color, Direction, Move, MoveList, Square};

impl Board {
    /// Pushes and diagonal captures. Pawns on the far row have nowhere to go
    /// and simply stay pawns.
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        let dr = color.pawn_direction();
        let forward = Direction::new(dr, 0);

        if info.allows(from, forward) {
            if let Some(one) = from.offset(forward, 1).filter(|sq| self.is_empty(*sq)) {
                moves.push(Move::new(from, one, self));
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(forward, 2).filter(|sq| self.is_empty(*sq)) {
                        moves.push(Move::new(from, two, self));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let diagonal = Direction::new(dr, dc);
            if !info.allows(from, diagonal) {
                continue;
            }
            let Some(target) = from.offset(diagonal, 1) else {
                continue;
            };
            if matches!(self.piece_at(target), Some((c, _)) if c != color) {
                moves.push(Move::new(from, target, self));
            }
        }
    }
}
