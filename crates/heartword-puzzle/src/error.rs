use heartword_core::{Direction, Letter, LetterError, Position};

/// Errors detected while building a [`Puzzle`](crate::Puzzle) or a [`ClueEntry`](crate::ClueEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The answer has no letters.
    #[display("clue {number} {direction} has an empty answer")]
    EmptyAnswer {
        /// Clue label.
        number: u16,
        /// Clue direction.
        direction: Direction,
    },
    /// The answer contains a character that is not a letter.
    #[display("clue {number} {direction} has an invalid answer")]
    InvalidAnswer {
        /// Clue label.
        number: u16,
        /// Clue direction.
        direction: Direction,
        /// The rejected character.
        source: LetterError,
    },
    /// Part of the clue span lies outside the grid.
    #[display("clue {number} {direction} runs off the grid")]
    OutOfBounds {
        /// Clue label.
        number: u16,
        /// Clue direction.
        direction: Direction,
    },
    /// The clue span covers a black square.
    #[display("clue {number} {direction} covers the black square at {position}")]
    BlackSquareInSpan {
        /// Clue label.
        number: u16,
        /// Clue direction.
        direction: Direction,
        /// The black square.
        position: Position,
    },
    /// Two crossing answers disagree on the letter of a shared cell.
    #[display("crossing answers disagree at {position}: {expected} vs {found}")]
    ConflictingIntersection {
        /// The shared cell.
        position: Position,
        /// Letter required by the earlier clue.
        expected: Letter,
        /// Letter required by the later clue.
        found: Letter,
    },
    /// The black-square mask was built for a different grid size.
    #[display("black squares are {black_squares}x{black_squares} but the grid is {size}x{size}")]
    SizeMismatch {
        /// Puzzle side length.
        size: u8,
        /// Side length of the black-square mask.
        black_squares: u8,
    },
}
