//! Move type and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::Board;

/// One ply: origin, destination and the square contents seen when it was built.
///
/// The moved and captured pieces are snapshots, so later changes to the board
/// never alter a move already constructed. Equality and hashing look only at
/// the two squares (see [`Move::id`]).
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Option<(Color, Piece)>,
    piece_captured: Option<(Color, Piece)>,
}

impl Move {
    /// Build a move against the current board, recording what sits on both squares.
    #[must_use]
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Move {
            from,
            to,
            piece_moved: board.piece_at(from),
            piece_captured: board.piece_at(to),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Piece that stood on the origin square when the move was built.
    #[inline]
    #[must_use]
    pub const fn piece_moved(self) -> Option<(Color, Piece)> {
        self.piece_moved
    }

    /// Piece that stood on the destination square when the move was built.
    #[inline]
    #[must_use]
    pub const fn piece_captured(self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_king_move(self) -> bool {
        matches!(self.piece_moved, Some((_, Piece::King)))
    }

    /// Packed identity: `from.row*1000 + from.col*100 + to.row*10 + to.col`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        (self.from.0 * 1000 + self.from.1 * 100 + self.to.0 * 10 + self.to.1) as u16
    }

    /// Square-pair notation such as "e2e4".
    #[must_use]
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some((color, piece)) = self.piece_moved {
            write!(f, " {}", piece.to_fen_char(color))?;
        }
        if let Some((color, piece)) = self.piece_captured {
            write!(f, " x{}", piece.to_fen_char(color))?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Upper bound on legal moves in any position, used as the initial capacity.
pub(crate) const MAX_MOVES: usize = 256;

/// Ordered list of moves produced by a generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain<F: FnMut(&Move) -> bool>(&mut self, keep: F) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Membership by square pair.
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Find the listed move going from `from` to `to`.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.from == from && m.to == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
