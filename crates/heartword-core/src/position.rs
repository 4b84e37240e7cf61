//! Grid coordinates and word directions.

use std::fmt::{self, Display};

/// The direction a crossword answer runs in.
///
/// # Examples
///
/// ```
/// use heartword_core::Direction;
///
/// assert_eq!(Direction::default(), Direction::Across);
/// assert_eq!(Direction::Across.toggled(), Direction::Down);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Flips the direction in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns the lowercase label used in clue lists.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell coordinate on a square crossword grid.
///
/// Rows and columns are zero-indexed; `(0, 0)` is the top-left cell. A position
/// carries no grid size, so bounds are checked by the methods that take one.
///
/// # Examples
///
/// ```
/// use heartword_core::{Direction, Position};
///
/// let pos = Position::new(2, 9);
/// assert_eq!(pos.next(Direction::Across, 11), Some(Position::new(2, 10)));
/// assert_eq!(Position::new(2, 10).next(Direction::Across, 11), None);
/// assert_eq!(pos.next(Direction::Down, 11), Some(Position::new(3, 9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns whether the position lies on a `size × size` grid.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the position `distance` cells away in `direction`.
    ///
    /// Returns `None` only if the coordinate would overflow; the result is not
    /// bounds-checked against any grid.
    #[must_use]
    pub const fn offset(self, direction: Direction, distance: u8) -> Option<Self> {
        match direction {
            Direction::Across => match self.col.checked_add(distance) {
                Some(col) => Some(Self::new(self.row, col)),
                None => None,
            },
            Direction::Down => match self.row.checked_add(distance) {
                Some(row) => Some(Self::new(row, self.col)),
                None => None,
            },
        }
    }

    /// Returns the following cell in `direction` on a `size × size` grid.
    #[must_use]
    pub fn next(self, direction: Direction, size: u8) -> Option<Self> {
        self.offset(direction, 1).filter(|pos| pos.is_within(size))
    }

    /// Returns the cell above, if any.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.row.checked_sub(1)?, self.col))
    }

    /// Returns the cell below on a `size × size` grid, if any.
    #[must_use]
    pub fn down(self, size: u8) -> Option<Self> {
        self.next(Direction::Down, size)
    }

    /// Returns the cell to the left, if any.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_sub(1)?))
    }

    /// Returns the cell to the right on a `size × size` grid, if any.
    #[must_use]
    pub fn right(self, size: u8) -> Option<Self> {
        self.next(Direction::Across, size)
    }

    /// Returns the row-major index of this position on a `size × size` grid.
    #[must_use]
    pub const fn to_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Iterates every position of a `size × size` grid in row-major order.
    pub fn all(size: u8) -> impl Iterator<Item = Self> + Clone {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
