//! Step vectors between squares.

/// A (row, column) step. Rays repeat the step; leapers apply it once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: isize,
    pub dc: isize,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn new(dr: isize, dc: isize) -> Self {
        Direction { dr, dc }
    }

    /// Rook rays (up, left, down, right)
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::new(-1, 0),
        Direction::new(0, -1),
        Direction::new(1, 0),
        Direction::new(0, 1),
    ];

    /// Bishop rays
    pub const DIAGONAL: [Direction; 4] = [
        Direction::new(-1, -1),
        Direction::new(-1, 1),
        Direction::new(1, -1),
        Direction::new(1, 1),
    ];

    /// Orthogonal rays followed by diagonal rays
    pub const ALL_RAYS: [Direction; 8] = [
        Direction::new(-1, 0),
        Direction::new(0, -1),
        Direction::new(1, 0),
        Direction::new(0, 1),
        Direction::new(-1, -1),
        Direction::new(-1, 1),
        Direction::new(1, -1),
        Direction::new(1, 1),
    ];

    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(-2, -1),
        Direction::new(-2, 1),
        Direction::new(-1, -2),
        Direction::new(-1, 2),
        Direction::new(1, -2),
        Direction::new(1, 2),
        Direction::new(2, -1),
        Direction::new(2, 1),
    ];

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.dr != 0 && self.dc != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        (self.dr == 0) != (self.dc == 0)
    }

    /// True if `other` points the same way or the exact opposite way.
    #[inline]
    #[must_use]
    pub const fn is_along(self, other: Direction) -> bool {
        (self.dr == other.dr && self.dc == other.dc)
            || (self.dr == -other.dr && self.dc == -other.dc)
    }
}
