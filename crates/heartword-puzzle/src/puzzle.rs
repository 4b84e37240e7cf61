use heartword_core::{BlackSquares, Direction, Letter, LetterGrid, Position};

use crate::{CellIndex, ClueEntry, PuzzleError};

/// A validated crossword definition.
///
/// The clue list keeps its declaration order, which decides which clue wins
/// when several contain the same cell. Every span lies on the grid, avoids
/// black squares, and agrees with every span it crosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: u8,
    clues: Vec<ClueEntry>,
    black_squares: BlackSquares,
    index: CellIndex,
    solution: LetterGrid,
}

impl Puzzle {
    /// Builds and validates a puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::SizeMismatch`] if `black_squares` has another
    /// side length, [`PuzzleError::OutOfBounds`] or
    /// [`PuzzleError::BlackSquareInSpan`] for a misplaced clue, and
    /// [`PuzzleError::ConflictingIntersection`] if two crossing answers
    /// disagree.
    pub fn new(
        size: u8,
        clues: Vec<ClueEntry>,
        black_squares: BlackSquares,
    ) -> Result<Self, PuzzleError> {
        if black_squares.size() != size {
            return Err(PuzzleError::SizeMismatch {
                size,
                black_squares: black_squares.size(),
            });
        }

        let mut solution = LetterGrid::new(size);
        for clue in &clues {
            let (number, direction) = (clue.number(), clue.direction());
            for (pos, letter) in clue.span() {
                if !pos.is_within(size) {
                    return Err(PuzzleError::OutOfBounds { number, direction });
                }
                if black_squares.contains(pos) {
                    return Err(PuzzleError::BlackSquareInSpan {
                        number,
                        direction,
                        position: pos,
                    });
                }
                match solution.get(pos) {
                    Some(expected) if expected != letter => {
                        return Err(PuzzleError::ConflictingIntersection {
                            position: pos,
                            expected,
                            found: letter,
                        });
                    }
                    Some(_) => {}
                    None => solution.set(pos, Some(letter)),
                }
            }
        }

        let index = CellIndex::new(size, &clues);
        Ok(Self {
            size,
            clues,
            black_squares,
            index,
            solution,
        })
    }

    /// Returns the grid side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the clues in declaration order.
    #[must_use]
    pub fn clues(&self) -> &[ClueEntry] {
        &self.clues
    }

    /// Returns the black-square mask.
    #[must_use]
    pub fn black_squares(&self) -> &BlackSquares {
        &self.black_squares
    }

    /// Returns whether `pos` is a black square.
    #[must_use]
    pub fn is_black(&self, pos: Position) -> bool {
        self.black_squares.contains(pos)
    }

    /// Returns the cell-to-clue index.
    #[must_use]
    pub fn index(&self) -> &CellIndex {
        &self.index
    }

    /// Returns the grid of expected letters. Cells outside every span are empty.
    #[must_use]
    pub fn solution(&self) -> &LetterGrid {
        &self.solution
    }

    /// Iterates the clues containing `pos`, in declaration order.
    pub fn clues_at(&self, pos: Position) -> impl Iterator<Item = &ClueEntry> + '_ {
        self.index.clues_at(pos).iter().map(|&i| &self.clues[i])
    }

    /// Returns the first clue running in `direction` whose span contains `pos`.
    #[must_use]
    pub fn clue_containing(&self, pos: Position, direction: Direction) -> Option<&ClueEntry> {
        self.clues_at(pos).find(|clue| clue.direction() == direction)
    }

    /// Returns the letter expected at `pos`, taken from the first clue in
    /// declaration order that contains it.
    #[must_use]
    pub fn expected_letter(&self, pos: Position) -> Option<Letter> {
        self.clues_at(pos)
            .next()
            .and_then(|clue| clue.expected_at(pos))
    }

    /// Returns the label of the first clue starting at `pos`.
    #[must_use]
    pub fn clue_number_at(&self, pos: Position) -> Option<u16> {
        self.clues
            .iter()
            .find(|clue| clue.origin() == pos)
            .map(ClueEntry::number)
    }

    /// Iterates the across clues in declaration order.
    pub fn across_clues(&self) -> impl Iterator<Item = &ClueEntry> + '_ {
        self.clues_in(Direction::Across)
    }

    /// Iterates the down clues in declaration order.
    pub fn down_clues(&self) -> impl Iterator<Item = &ClueEntry> + '_ {
        self.clues_in(Direction::Down)
    }

    /// Iterates the clues running in `direction` in declaration order.
    pub fn clues_in(&self, direction: Direction) -> impl Iterator<Item = &ClueEntry> + '_ {
        self.clues
            .iter()
            .filter(move |clue| clue.direction() == direction)
    }

    /// Returns the number of playable cells covered by at least one clue.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.solution.filled_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(number: u16, answer: &str, row: u8, col: u8, direction: Direction) -> ClueEntry {
        ClueEntry::new(number, "", answer, Position::new(row, col), direction).unwrap()
    }

    #[test]
    fn test_rejects_conflicting_intersection() {
        let clues = vec![
            clue(1, "LOVE", 0, 0, Direction::Across),
            clue(1, "SEHAJ", 0, 0, Direction::Down),
        ];
        assert_eq!(
            Puzzle::new(5, clues, BlackSquares::new(5)),
            Err(PuzzleError::ConflictingIntersection {
                position: Position::new(0, 0),
                expected: Letter::from_char('L').unwrap(),
                found: Letter::from_char('S').unwrap(),
            })
        );
    }

    #[test]
    fn test_rejects_out_of_bounds_span() {
        let clues = vec![clue(3, "SWEET", 0, 1, Direction::Across)];
        assert_eq!(
            Puzzle::new(5, clues, BlackSquares::new(5)),
            Err(PuzzleError::OutOfBounds {
                number: 3,
                direction: Direction::Across
            })
        );
    }

    #[test]
    fn test_rejects_black_square_in_span() {
        let clues = vec![clue(2, "HUG", 0, 2, Direction::Down)];
        let blacks = BlackSquares::from_positions(4, [Position::new(2, 2)]);
        assert_eq!(
            Puzzle::new(4, clues, blacks),
            Err(PuzzleError::BlackSquareInSpan {
                number: 2,
                direction: Direction::Down,
                position: Position::new(2, 2),
            })
        );
    }

    #[test]
    fn test_rejects_size_mismatch() {
        assert_eq!(
            Puzzle::new(5, vec![], BlackSquares::new(4)),
            Err(PuzzleError::SizeMismatch {
                size: 5,
                black_squares: 4
            })
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let clues = vec![
            clue(1, "HUG", 0, 0, Direction::Across),
            clue(1, "HI", 0, 0, Direction::Down),
            clue(2, "GO", 0, 2, Direction::Down),
        ];
        let puzzle = Puzzle::new(3, clues, BlackSquares::new(3)).unwrap();

        assert_eq!(puzzle.clue_number_at(Position::new(0, 2)), Some(2));
        assert_eq!(puzzle.clue_number_at(Position::new(0, 1)), None);
        assert_eq!(puzzle.across_clues().count(), 1);
        assert_eq!(puzzle.down_clues().count(), 2);

        let pos = Position::new(0, 2);
        assert_eq!(
            puzzle.clue_containing(pos, Direction::Across).map(ClueEntry::number),
            Some(1)
        );
        assert_eq!(
            puzzle.clue_containing(Position::new(1, 2), Direction::Across),
            None
        );
        assert_eq!(puzzle.expected_letter(Position::new(1, 2)).map(Letter::as_char), Some('O'));
        assert_eq!(puzzle.expected_letter(Position::new(2, 2)), None);
        assert_eq!(puzzle.playable_count(), 5);
        assert_eq!(puzzle.solution().to_string(), "HUGI.O...");
    }
}
