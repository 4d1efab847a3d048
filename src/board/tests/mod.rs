//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-count checks against known node totals
//! - `make_unmake.rs` - Apply/undo correctness and the checked apply path
//! - `edge_cases.rs` - Pins, checks, double check and terminal positions
//! - `proptest.rs` - Property-based tests over random playouts


use crate::board::{Board, Color, Move, Piece, Square};

/// Parse algebraic square notation; test positions only.
pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

pub(super) fn find_move(board: &Board, from: &str, to: &str) -> Move {
    board
        .legal_moves()
        .find(sq(from), sq(to))
        .unwrap_or_else(|| panic!("Expected move {from}{to} not found"))
}

/// Everything the board must restore after an undo.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Snapshot {
    fen: String,
    side: Color,
    white_king: Square,
    black_king: Square,
    history_len: usize,
}

pub(super) fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        fen: board.to_fen(),
        side: board.side_to_move(),
        white_king: board.king_square(Color::White),
        black_king: board.king_square(Color::Black),
        history_len: board.history().len(),
    }
}

/// Both cached king squares hold the matching king.
pub(super) fn king_cache_consistent(board: &Board) -> bool {
    Color::BOTH
        .iter()
        .all(|&c| board.piece_at(board.king_square(c)) == Some((c, Piece::King)))
}

/// Independent attack oracle: can any unpinned pseudo-legal move of
/// `attacker` land on `target`, or is the attacker's king adjacent to it?
pub(super) fn reachable_by(board: &Board, target: Square, attacker: Color) -> bool {
    let unpinned = crate::board::CheckInfo::default();
    let adjacent_king = {
        let k = board.king_square(attacker);
        k.row().abs_diff(target.row()) <= 1 && k.column().abs_diff(target.column()) <= 1
    };
    adjacent_king
        || board
            .generate_pseudo_moves(attacker, &unpinned)
            .iter()
            .any(|m| m.to() == target)
}
