//! Core data structures for crossword applications.
//!
//! This crate provides the small, strongly typed building blocks shared by the
//! puzzle definition, the game engine, and the application front end.
//!
//! # Overview
//!
//! - [`position`]: zero-indexed `(row, col)` cell coordinates and [`Direction`]
//! - [`letter`]: type-safe uppercase letters `A`-`Z`
//! - [`letter_grid`]: a square grid of optional letters with a compact text format
//! - [`black_squares`]: the non-playable cell mask of a puzzle
//!
//! # Examples
//!
//! ```
//! use heartword_core::{Direction, Letter, LetterGrid, Position};
//!
//! let mut grid = LetterGrid::new(11);
//! let pos = Position::new(0, 0);
//! grid.set(pos, Some(Letter::from_char('l').unwrap()));
//!
//! assert_eq!(grid.get(pos).map(Letter::as_char), Some('L'));
//! assert_eq!(pos.next(Direction::Across, 11), Some(Position::new(0, 1)));
//! ```

pub mod black_squares;
pub mod letter;
pub mod letter_grid;
pub mod position;

pub use self::{
    black_squares::BlackSquares,
    letter::{Letter, LetterError},
    letter_grid::{LetterGrid, LetterGridParseError},
    position::{Direction, Position},
};
