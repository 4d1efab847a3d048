use once_cell::sync::Lazy;

use super::super::{Board, CheckInfo, Color, Direction, Move, MoveList, Square};

/// On-board knight destinations for each square, indexed `row * 8 + column`.
static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    Square::all()
        .map(|from| {
            Direction::KNIGHT_JUMPS
                .iter()
                .filter_map(|&jump| from.offset(jump, 1))
                .collect()
        })
        .collect()
});

impl Board {
    /// A pinned knight can never stay on its pin ray, so it has no moves.
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        info: &CheckInfo,
        moves: &mut MoveList,
    ) {
        if info.pin_direction(from).is_some() {
            return;
        }
        for &to in &KNIGHT_TARGETS[from.row() * 8 + from.column()] {
            if !matches!(self.piece_at(to), Some((c, _)) if c == color) {
                moves.push(Move::new(from, to, self));
            }
        }
    }
}
