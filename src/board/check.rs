//! Pin and check detection.
//!
//! A [`CheckInfo`] is computed from scratch for one color and one king square
//! at the start of every legal-move query. It is read-only afterwards: the
//! per-piece generators look up pins in it but never modify it, so the order
//! in which generators run does not matter.

use super::{Board, Color, Direction, Piece, Square};

/// A piece that may only move along `direction` (either sense).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Ray from the king through the pinned piece toward the pinner.
    pub direction: Direction,
}

/// How a checking piece reaches the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckLine {
    /// Along a ray from the king; the check can be blocked on that ray.
    Ray(Direction),
    /// A knight jump from the king; only capture or a king move resolves it.
    Knight(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub line: CheckLine,
}

impl Check {
    /// Destinations that resolve this check for a non-king piece: the
    /// checker's own square, plus every square between it and the king when
    /// the check runs along a ray.
    #[must_use]
    pub fn resolving_squares(&self, king: Square) -> Vec<Square> {
        match self.line {
            CheckLine::Knight(_) => vec![self.square],
            CheckLine::Ray(dir) => {
                let mut squares = Vec::with_capacity(7);
                for step in 1..8 {
                    let Some(sq) = king.offset(dir, step) else {
                        break;
                    };
                    squares.push(sq);
                    if sq == self.square {
                        break;
                    }
                }
                squares
            }
        }
    }
}

/// Pins and checks against one king square.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    /// Pin ray of the piece on `sq`, if it is pinned.
    #[must_use]
    pub fn pin_direction(&self, sq: Square) -> Option<Direction> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }

    /// Whether a piece on `sq` may step along `dir` given its pin, if any.
    #[inline]
    #[must_use]
    pub fn allows(&self, sq: Square, dir: Direction) -> bool {
        self.pin_direction(sq).map_or(true, |pin| pin.is_along(dir))
    }

    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Can `piece` of `color`, standing `distance` steps from the king along
/// `dir`, attack back down that ray?
fn attacks_along(piece: Piece, color: Color, dir: Direction, distance: isize) -> bool {
    match piece {
        Piece::Rook | Piece::Bishop | Piece::Queen => {
            (dir.is_orthogonal() && piece.attacks_straight())
                || (dir.is_diagonal() && piece.attacks_diagonally())
        }
        Piece::King => distance == 1,
        // A pawn captures toward rows in its own pawn direction, so the king
        // sits opposite to that from the pawn's point of view.
        Piece::Pawn => {
            distance == 1 && dir.is_diagonal() && dir.dr == -color.pawn_direction()
        }
        Piece::Knight => false,
    }
}

impl Board {
    /// Pins and checks against a `color` king standing on `king_sq`.
    ///
    /// `king_sq` need not be where that king actually is: the king-move probe
    /// asks about its destination square. The real king is skipped over when
    /// scanning, as it will have left its square by then.
    #[must_use]
    pub fn pins_and_checks(&self, color: Color, king_sq: Square) -> CheckInfo {
        let mut info = CheckInfo::default();

        for dir in Direction::ALL_RAYS {
            let mut blocker: Option<Square> = None;
            for step in 1..8 {
                let Some(sq) = king_sq.offset(dir, step) else {
                    break;
                };
                match self.piece_at(sq) {
                    None => {}
                    Some((c, Piece::King)) if c == color => {}
                    Some((c, _)) if c == color => {
                        if blocker.is_some() {
                            break;
                        }
                        blocker = Some(sq);
                    }
                    Some((c, piece)) => {
                        if attacks_along(piece, c, dir, step) {
                            match blocker {
                                None => info.checks.push(Check {
                                    square: sq,
                                    line: CheckLine::Ray(dir),
                                }),
                                Some(pinned) => info.pins.push(Pin {
                                    square: pinned,
                                    direction: dir,
                                }),
                            }
                        }
                        break;
                    }
                }
            }
        }

        for jump in Direction::KNIGHT_JUMPS {
            let Some(sq) = king_sq.offset(jump, 1) else {
                continue;
            };
            if self.piece_at(sq) == Some((color.opponent(), Piece::Knight)) {
                info.checks.push(Check {
                    square: sq,
                    line: CheckLine::Knight(jump),
                });
            }
        }

        info.in_check = !info.checks.is_empty();
        info
    }

    /// Pins and checks for the side to move at its cached king square.
    #[must_use]
    pub fn check_info(&self) -> CheckInfo {
        let color = self.side_to_move();
        self.pins_and_checks(color, self.king_square(color))
    }

    /// Is `color`'s king attacked right now? Independent of side to move.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pins_and_checks(color, self.king_square(color)).in_check
    }

    /// Would a king of `by`'s opponent standing on `sq` be attacked by `by`?
    ///
    /// The observer color is explicit, so probing never touches the side to
    /// move. The defending king is treated as absent from its own square.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.pins_and_checks(by.opponent(), sq).in_check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn kings() -> BoardBuilder {
        BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 0), Color::Black, Piece::King)
    }

    #[test]
    fn test_rook_pins_knight_on_file() {
        let board = kings()
            .piece(Square(5, 4), Color::White, Piece::Knight)
            .piece(Square(1, 4), Color::Black, Piece::Rook)
            .build()
            .expect("valid position");
        let info = board.check_info();
        assert!(!info.in_check);
        assert_eq!(
            info.pins,
            vec![Pin {
                square: Square(5, 4),
                direction: Direction::new(-1, 0)
            }]
        );
    }

    #[test]
    fn test_two_blockers_do_not_pin() {
        let board = kings()
            .piece(Square(5, 4), Color::White, Piece::Knight)
            .piece(Square(4, 4), Color::White, Piece::Bishop)
            .piece(Square(1, 4), Color::Black, Piece::Rook)
            .build()
            .expect("valid position");
        let info = board.check_info();
        assert!(info.pins.is_empty());
        assert!(info.checks.is_empty());
    }

    #[test]
    fn test_bishop_on_file_neither_pins_nor_checks() {
        let board = kings()
            .piece(Square(5, 4), Color::White, Piece::Knight)
            .piece(Square(1, 4), Color::Black, Piece::Bishop)
            .build()
            .expect("valid position");
        let info = board.check_info();
        assert!(info.pins.is_empty());
        assert!(!info.in_check);
    }

    #[test]
    fn test_pawn_checks_only_from_front_diagonal() {
        let checking = kings()
            .piece(Square(6, 3), Color::Black, Piece::Pawn)
            .build()
            .expect("valid position");
        assert!(checking.is_in_check(Color::White));

        let behind = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, Piece::King)
            .piece(Square(0, 0), Color::Black, Piece::King)
            .piece(Square(5, 3), Color::Black, Piece::Pawn)
            .build()
            .expect("valid position");
        assert!(!behind.is_in_check(Color::White));
    }

    #[test]
    fn test_knight_check_resolves_only_by_capture() {
        let board = kings()
            .piece(Square(5, 5), Color::Black, Piece::Knight)
            .build()
            .expect("valid position");
        let info = board.check_info();
        assert!(info.in_check);
        assert_eq!(info.checks.len(), 1);
        let check = info.checks[0];
        assert!(matches!(check.line, CheckLine::Knight(_)));
        assert_eq!(check.resolving_squares(Square(7, 4)), vec![Square(5, 5)]);
    }

    #[test]
    fn test_ray_check_resolving_squares_run_up_to_checker() {
        let board = kings()
            .piece(Square(4, 1), Color::Black, Piece::Bishop)
            .build()
            .expect("valid position");
        let info = board.check_info();
        assert_eq!(info.checks.len(), 1);
        assert_eq!(
            info.checks[0].resolving_squares(Square(7, 4)),
            vec![Square(6, 3), Square(5, 2), Square(4, 1)]
        );
    }

    #[test]
    fn test_square_attack_probe_ignores_side_to_move() {
        let board = kings()
            .piece(Square(3, 7), Color::Black, Piece::Rook)
            .side_to_move(Color::Black)
            .build()
            .expect("valid position");
        assert!(board.is_square_attacked(Square(3, 0), Color::Black));
        assert!(!board.is_square_attacked(Square(4, 0), Color::Black));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_own_king_does_not_shield_its_destination() {
        // Rook on the back rank: e1 king stepping to f1 stays on the ray.
        let board = kings()
            .piece(Square(7, 0), Color::Black, Piece::Rook)
            .build()
            .expect("valid position");
        assert!(board.is_in_check(Color::White));
        assert!(board.is_square_attacked(Square(7, 5), Color::Black));
    }
}
