//! Non-playable cell mask.

use crate::Position;

/// The set of black (non-playable) squares of a square grid.
///
/// Black squares are never written to and never selected.
///
/// # Examples
///
/// ```
/// use heartword_core::{BlackSquares, Position};
///
/// let blacks = BlackSquares::from_positions(11, [Position::new(1, 3), Position::new(12, 0)]);
/// assert!(blacks.contains(Position::new(1, 3)));
/// assert!(!blacks.contains(Position::new(0, 0)));
/// // Coordinates outside the grid are dropped.
/// assert_eq!(blacks.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlackSquares {
    size: u8,
    mask: Vec<bool>,
}

impl BlackSquares {
    /// Creates a mask with no black squares.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let len = usize::from(size) * usize::from(size);
        Self {
            size,
            mask: vec![false; len],
        }
    }

    /// Creates a mask from a list of coordinates, ignoring those outside the grid.
    #[must_use]
    pub fn from_positions<I>(size: u8, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut this = Self::new(size);
        for pos in positions {
            if pos.is_within(size) {
                this.mask[pos.to_index(size)] = true;
            }
        }
        this
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns whether `pos` is a black square. Positions outside the grid are not.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size) && self.mask[pos.to_index(self.size)]
    }

    /// Returns the number of black squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mask.iter().filter(|black| **black).count()
    }

    /// Returns whether the grid has no black squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.mask.contains(&true)
    }

    /// Iterates the black squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all(self.size)
            .zip(&self.mask)
            .filter_map(|(pos, black)| black.then_some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let blacks = BlackSquares::new(5);
        assert!(blacks.is_empty());
        assert_eq!(blacks.len(), 0);
        assert!(Position::all(5).all(|pos| !blacks.contains(pos)));
    }

    #[test]
    fn test_iter_in_row_major_order() {
        let blacks = BlackSquares::from_positions(
            4,
            [Position::new(3, 0), Position::new(0, 2), Position::new(0, 2)],
        );
        let positions: Vec<_> = blacks.iter().collect();
        assert_eq!(positions, vec![Position::new(0, 2), Position::new(3, 0)]);
        assert!(!blacks.contains(Position::new(4, 4)));
    }
}
