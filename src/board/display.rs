use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// Text grid with rank 8 at the top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} |", Square(row, 0).rank_char())?;
            for column in 0..8 {
                let ch = self
                    .piece_at(Square(row, column))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
