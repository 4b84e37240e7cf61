//! The bundled keepsake puzzle.

use heartword_core::{BlackSquares, Direction, Position};

use crate::{ClueEntry, Puzzle};

const SIZE: u8 = 11;

/// `(number, clue, answer, row, col, direction)` in declaration order.
const CLUES: &[(u16, &str, &str, u8, u8, Direction)] = &[
    (1, "Deep affection (4)", "LOVE", 0, 0, Direction::Across),
    (1, "Always by your side (5)", "LOYAL", 0, 0, Direction::Down),
    (2, "Before the sun, when our talks ended (5)", "EARLY", 0, 3, Direction::Down),
    (3, "Like you, always (5)", "SWEET", 0, 6, Direction::Across),
    (3, "Forever partner, ___mate (4)", "SOUL", 0, 6, Direction::Down),
    (4, "Foundation of us (5)", "TRUST", 0, 10, Direction::Down),
    (5, "Forever ___, always (5)", "YOURS", 2, 0, Direction::Across),
    (6, "Facial joy (5)", "SMILE", 2, 4, Direction::Down),
    (7, "Two ___, one story (5)", "LIVES", 3, 6, Direction::Across),
    (8, "My fair ___ (4)", "LADY", 4, 0, Direction::Across),
    (9, "Romantic evening out (4)", "DATE", 4, 7, Direction::Down),
    (10, "Symbol of love (5)", "HEART", 6, 3, Direction::Across),
    (11, "Color of roses (3)", "RED", 6, 6, Direction::Down),
    (12, "Term of endearment (4)", "DEAR", 7, 8, Direction::Down),
    (13, "Close together (6)", "CUDDLE", 8, 3, Direction::Across),
    (14, "Happily ___ after (4)", "EVER", 10, 5, Direction::Across),
];

const BLACK_SQUARES: &[(u8, u8)] = &[
    (1, 1),
    (1, 2),
    (1, 7),
    (1, 8),
    (1, 9),
    (3, 1),
    (3, 2),
    (5, 0),
    (5, 1),
    (5, 5),
    (5, 6),
    (5, 9),
    (5, 10),
    (7, 2),
    (7, 5),
    (9, 1),
    (9, 5),
    (9, 9),
    (10, 4),
];

impl Puzzle {
    /// Returns the bundled 11×11 keepsake puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use heartword_core::Position;
    /// use heartword_puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::keepsake();
    /// assert_eq!(puzzle.size(), 11);
    /// assert_eq!(puzzle.clues().len(), 16);
    /// assert!(puzzle.is_black(Position::new(1, 1)));
    /// ```
    #[must_use]
    #[expect(clippy::missing_panics_doc, reason = "the bundled puzzle is validated by tests")]
    pub fn keepsake() -> Self {
        let clues = CLUES
            .iter()
            .map(|&(number, clue, answer, row, col, direction)| {
                ClueEntry::new(number, clue, answer, Position::new(row, col), direction)
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("bundled clues must be well-formed");
        let black_squares = BlackSquares::from_positions(
            SIZE,
            BLACK_SQUARES
                .iter()
                .map(|&(row, col)| Position::new(row, col)),
        );
        Self::new(SIZE, clues, black_squares).expect("bundled puzzle must be consistent")
    }
}
