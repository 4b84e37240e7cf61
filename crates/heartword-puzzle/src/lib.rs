//! Crossword puzzle definitions.
//!
//! A [`Puzzle`] is the static, validated description of a crossword: its grid
//! size, its ordered list of [`ClueEntry`] records, and its black squares.
//! Construction checks that every clue span stays on the grid, avoids black
//! squares, and agrees with every clue it crosses, so code built on top of a
//! `Puzzle` can rely on the intersection invariant without re-deriving it.
//!
//! [`Puzzle::keepsake`] returns the bundled 11×11 puzzle.
//!
//! # Examples
//!
//! ```
//! use heartword_core::{BlackSquares, Direction, Position};
//! use heartword_puzzle::{ClueEntry, Puzzle};
//!
//! let clues = vec![
//!     ClueEntry::new(1, "Deep affection (4)", "LOVE", Position::new(0, 0), Direction::Across)?,
//!     ClueEntry::new(1, "Always by your side (5)", "LOYAL", Position::new(0, 0), Direction::Down)?,
//! ];
//! let puzzle = Puzzle::new(5, clues, BlackSquares::new(5))?;
//!
//! let pos = Position::new(0, 0);
//! assert_eq!(puzzle.expected_letter(pos).map(|l| l.as_char()), Some('L'));
//! assert_eq!(puzzle.clues_at(pos).count(), 2);
//! # Ok::<(), heartword_puzzle::PuzzleError>(())
//! ```

pub use self::{
    cell_index::CellIndex,
    clue::ClueEntry,
    error::PuzzleError,
    puzzle::Puzzle,
};

mod cell_index;
mod clue;
mod error;
mod keepsake;
mod puzzle;
