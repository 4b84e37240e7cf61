use heartword_core::Position;

use crate::ClueEntry;

/// Precomputed lookup from a cell to the clues whose spans contain it.
///
/// Clue indices refer to the puzzle's clue list and are stored in declaration
/// order, so the first entry for a cell is the first clue that covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellIndex {
    size: u8,
    cells: Vec<Vec<usize>>,
}

impl CellIndex {
    /// Builds the index for `clues` on a `size × size` grid.
    ///
    /// Span cells outside the grid are skipped.
    #[must_use]
    pub fn new(size: u8, clues: &[ClueEntry]) -> Self {
        let mut cells = vec![Vec::new(); usize::from(size) * usize::from(size)];
        for (i, clue) in clues.iter().enumerate() {
            for pos in clue.cells().filter(|pos| pos.is_within(size)) {
                cells[pos.to_index(size)].push(i);
            }
        }
        Self { size, cells }
    }

    /// Returns the indices of the clues containing `pos`, in declaration order.
    ///
    /// Empty for cells no clue covers and for positions outside the grid.
    #[must_use]
    pub fn clues_at(&self, pos: Position) -> &[usize] {
        if pos.is_within(self.size) {
            &self.cells[pos.to_index(self.size)]
        } else {
            &[]
        }
    }

    /// Returns whether at least one clue covers `pos`.
    #[must_use]
    pub fn is_covered(&self, pos: Position) -> bool {
        !self.clues_at(pos).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use heartword_core::Direction;

    use super::*;

    #[test]
    fn test_declaration_order_is_kept() {
        let clues = [
            ClueEntry::new(2, "", "AB", Position::new(0, 1), Direction::Down).unwrap(),
            ClueEntry::new(1, "", "XA", Position::new(0, 0), Direction::Across).unwrap(),
        ];
        let index = CellIndex::new(3, &clues);
        assert_eq!(index.clues_at(Position::new(0, 1)), &[0, 1]);
        assert_eq!(index.clues_at(Position::new(0, 0)), &[1]);
        assert_eq!(index.clues_at(Position::new(1, 1)), &[0]);
        assert!(!index.is_covered(Position::new(2, 2)));
        assert!(index.clues_at(Position::new(5, 5)).is_empty());
    }
}
