use heartword_core::Position;

/// Errors that can occur while restoring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The restored grid has a different side length than the puzzle.
    #[display("grid is {found}x{found} but the puzzle is {expected}x{expected}")]
    SizeMismatch {
        /// Puzzle side length.
        expected: u8,
        /// Side length of the restored grid.
        found: u8,
    },
    /// The restored grid holds a letter on a black square.
    #[display("black square at {position} holds a letter")]
    BlackSquareFilled {
        /// The offending cell.
        position: Position,
    },
}
