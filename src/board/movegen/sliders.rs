use super::super::{Board, CheckInfo, Color, Direction, Move, MoveList, Square};

impl Board {
    /// Ray moves for bishops, rooks and queens. Each ray runs until the edge,
    /// stops short of an ally, and stops on (including) an enemy.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[Direction],
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        for &dir in rays {
            if !info.allows(from, dir) {
                continue;
            }
            for step in 1..8 {
                let Some(to) = from.offset(dir, step) else {
                    break;
                };
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, self)),
                    Some((c, _)) if c != color => {
                        moves.push(Move::new(from, to, self));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
