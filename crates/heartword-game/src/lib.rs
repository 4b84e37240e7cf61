//! Crossword game session management.
//!
//! [`Game`] combines a validated [`Puzzle`](heartword_puzzle::Puzzle) with the
//! player's letter grid, the current selection, and the reveal budget. Every
//! operation is synchronous and infallible: calls made without a valid
//! precondition (no selection, an exhausted budget, a black square) leave the
//! state unchanged and report it through their return value.
//!
//! # Examples
//!
//! ```
//! use heartword_core::{Letter, Position};
//! use heartword_game::{CheckResult, Game, InputOperation};
//! use heartword_puzzle::Puzzle;
//!
//! let mut game = Game::new(Puzzle::keepsake());
//! game.select_cell(Position::new(0, 0));
//! for ch in "LOVE".chars() {
//!     let letter = Letter::from_char(ch).unwrap();
//!     assert_eq!(game.enter_letter(letter), InputOperation::Set);
//! }
//! assert_eq!(game.selected_cell(), Some(Position::new(0, 4)));
//! assert_eq!(game.check_word(), None);
//!
//! game.select_cell(Position::new(0, 1));
//! assert_eq!(game.check_word().map(|check| check.result), Some(CheckResult::Correct));
//! assert!(!game.is_complete());
//! ```

pub use self::{
    error::GameError,
    game::{DEFAULT_REVEAL_BUDGET, Game},
    outcome::{CheckResult, InputOperation, Movement, SelectOutcome, WordCheck},
};

mod error;
mod game;
mod outcome;
