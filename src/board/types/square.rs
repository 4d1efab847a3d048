//! Square type and notation helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::SquareError;

/// Map a file letter to a column index (a -> 0, h -> 7).
pub(crate) fn file_to_column(file: char) -> Option<usize> {
    match file {
        'a'..='h' => Some(file as usize - 'a' as usize),
        _ => None,
    }
}

/// Map a rank digit to a row index (8 -> 0, 1 -> 7).
pub(crate) fn rank_to_row(rank: char) -> Option<usize> {
    match rank {
        '1'..='8' => Some(8 - (rank as usize - '0' as usize)),
        _ => None,
    }
}

/// A square on the board as (row, column).
///
/// Row 0 is rank 8 and row 7 is rank 1; column 0 is file a and column 7 is
/// file h. This matches the on-screen orientation with White at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, column)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Square(row, column))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }

    /// Rank character ('1'..='8')
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8' - self.0 as u8) as char
    }

    /// File character ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Step `steps` times along `dir`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dir: Direction, steps: isize) -> Option<Square> {
        let row = self.0 as isize + dir.dr * steps;
        let column = self.1 as isize + dir.dc * steps;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square(row as usize, column as usize))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if column >= 8 {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Square(row, column))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let column = file_to_column(file).ok_or_else(invalid)?;
        let row = rank_to_row(rank).ok_or_else(invalid)?;
        Ok(Square(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_notation() {
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(7, 0).to_string(), "a1");
        assert_eq!(Square(7, 7).to_string(), "h1");
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!("e4".parse::<Square>(), Ok(Square(4, 4)));
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::ColumnOutOfBounds { column: 9 })
        );
        assert_eq!(Square::try_from((3, 3)), Ok(Square(3, 3)));
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square(0, 0);
        assert_eq!(corner.offset(Direction::new(-1, 0), 1), None);
        assert_eq!(corner.offset(Direction::new(1, 1), 7), Some(Square(7, 7)));
        assert_eq!(corner.offset(Direction::new(1, 1), 8), None);
        assert_eq!(Square::all().count(), 64);
    }
}
