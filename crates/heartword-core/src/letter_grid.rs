//! Square grid of optional letters.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Letter, Position};

/// Error returned when parsing a [`LetterGrid`] from its text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterGridParseError {
    /// The input contained no cells.
    #[display("grid text is empty")]
    Empty,
    /// The number of cells is not a perfect square.
    #[display("grid text has {len} cells, which is not a square number")]
    NotSquare {
        /// Number of cells found.
        len: usize,
    },
    /// The grid side length does not fit in a `u8`.
    #[display("grid with {len} cells is too large")]
    TooLarge {
        /// Number of cells found.
        len: usize,
    },
    /// A cell character is neither a letter nor an empty marker.
    #[display("invalid cell character {ch:?} at index {index}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
        /// Row-major cell index of the character.
        index: usize,
    },
}

/// A square `size × size` grid of optional letters, stored row-major.
///
/// # Text format
///
/// One character per cell in row-major order: a letter for a filled cell and
/// `.`, `_` or `0` for an empty one. Whitespace is ignored when parsing, and the
/// side length is inferred from the cell count. [`Display`] writes `.` for empty
/// cells without separators, so the output parses back to the same grid.
///
/// # Examples
///
/// ```
/// use heartword_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "LO.. .... .... ....".parse().unwrap();
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.get(Position::new(0, 1)).map(|l| l.as_char()), Some('O'));
/// assert_eq!(grid.get(Position::new(0, 2)), None);
/// assert_eq!(grid.to_string(), "LO..............");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates an empty grid with the given side length.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        if pos.is_within(self.size) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Replaces the content of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, letter: Option<Letter>) {
        assert!(
            pos.is_within(self.size),
            "position {pos} is outside a {0}x{0} grid",
            self.size
        );
        self.cells[pos.to_index(self.size)] = letter;
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Returns whether no cell holds a letter.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Letter>]> {
        self.cells.chunks(usize::from(self.size).max(1))
    }

    /// Iterates `(position, letter)` for every filled cell in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        Position::all(self.size)
            .zip(&self.cells)
            .filter_map(|(pos, cell)| cell.map(|letter| (pos, letter)))
    }
}

impl Index<Position> for LetterGrid {
    type Output = Option<Letter>;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.is_within(self.size));
        &self.cells[pos.to_index(self.size)]
    }
}

impl FromStr for LetterGrid {
    type Err = LetterGridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .enumerate()
            .map(|(index, ch)| match ch {
                '.' | '_' | '0' => Ok(None),
                ch => Letter::from_char(ch)
                    .map(Some)
                    .map_err(|_| LetterGridParseError::InvalidChar { ch, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = cells.len();
        if len == 0 {
            return Err(LetterGridParseError::Empty);
        }
        let side = len.isqrt();
        if side * side != len {
            return Err(LetterGridParseError::NotSquare { len });
        }
        let size = u8::try_from(side).map_err(|_| LetterGridParseError::TooLarge { len })?;
        Ok(Self { size, cells })
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            f.write_char(cell.map_or('.', Letter::as_char))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = LetterGrid::new(11);
        assert_eq!(grid.size(), 11);
        assert!(grid.is_blank());
        assert_eq!(grid.rows().count(), 11);
        assert!(grid.rows().all(|row| row.len() == 11));
    }

    #[test]
    fn test_get_outside_grid_is_none() {
        let grid: LetterGrid = "ABCD".parse().unwrap();
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(1, 1)).map(Letter::as_char), Some('D'));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_outside_grid_panics() {
        let mut grid = LetterGrid::new(2);
        grid.set(Position::new(0, 2), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(LetterGridParseError::Empty));
        assert_eq!(
            "ABC".parse::<LetterGrid>(),
            Err(LetterGridParseError::NotSquare { len: 3 })
        );
        assert_eq!(
            "AB?D".parse::<LetterGrid>(),
            Err(LetterGridParseError::InvalidChar { ch: '?', index: 2 })
        );
    }

    #[test]
    fn test_letters_and_counts() {
        let mut grid = LetterGrid::new(3);
        grid.set(Position::new(1, 2), Some(Letter::from_char('H').unwrap()));
        grid.set(Position::new(2, 0), Some(Letter::from_char('U').unwrap()));
        assert_eq!(grid.filled_count(), 2);
        let letters: Vec<_> = grid.letters().map(|(pos, l)| (pos, l.as_char())).collect();
        assert_eq!(
            letters,
            vec![(Position::new(1, 2), 'H'), (Position::new(2, 0), 'U')]
        );

        grid.clear();
        assert!(grid.is_blank());
    }
}
