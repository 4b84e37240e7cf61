use heartword_core::{Direction, Letter, Position};

use crate::PuzzleError;

/// One clue of a crossword: its label, text, answer, and placement.
///
/// The span of a clue is the ordered run of cells covered by its answer,
/// starting at `origin` and extending across or down by the answer's length.
///
/// # Examples
///
/// ```
/// use heartword_core::{Direction, Position};
/// use heartword_puzzle::ClueEntry;
///
/// let clue = ClueEntry::new(9, "Romantic evening out (4)", "date", Position::new(4, 7), Direction::Down)?;
/// assert_eq!(clue.answer_str(), "DATE");
/// assert!(clue.contains(Position::new(6, 7)));
/// assert_eq!(clue.expected_at(Position::new(6, 7)).map(|l| l.as_char()), Some('T'));
/// assert!(!clue.contains(Position::new(8, 7)));
/// # Ok::<(), heartword_puzzle::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    number: u16,
    clue: String,
    answer: Vec<Letter>,
    origin: Position,
    direction: Direction,
}

impl ClueEntry {
    /// Creates a clue entry. The answer is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyAnswer`] if `answer` is empty,
    /// [`PuzzleError::InvalidAnswer`] if it contains a non-letter, and
    /// [`PuzzleError::OutOfBounds`] if the span would leave the coordinate range.
    pub fn new(
        number: u16,
        clue: impl Into<String>,
        answer: &str,
        origin: Position,
        direction: Direction,
    ) -> Result<Self, PuzzleError> {
        let answer = answer
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| PuzzleError::InvalidAnswer {
                number,
                direction,
                source,
            })?;
        if answer.is_empty() {
            return Err(PuzzleError::EmptyAnswer { number, direction });
        }
        let last = u8::try_from(answer.len() - 1)
            .ok()
            .and_then(|distance| origin.offset(direction, distance));
        if last.is_none() {
            return Err(PuzzleError::OutOfBounds { number, direction });
        }

        Ok(Self {
            number,
            clue: clue.into(),
            answer,
            origin,
            direction,
        })
    }

    /// Returns the label shown in the grid and the clue list.
    #[must_use]
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the answer letters.
    #[must_use]
    pub fn answer(&self) -> &[Letter] {
        &self.answer
    }

    /// Returns the answer as an uppercase string.
    #[must_use]
    pub fn answer_str(&self) -> String {
        self.answer.iter().map(|letter| letter.as_char()).collect()
    }

    /// Returns the cell of the first letter.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the direction the answer runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the answer length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    /// Always `false`; answers are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Iterates the span as `(cell, expected letter)` pairs, first letter first.
    pub fn span(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        (0..=u8::MAX)
            .zip(&self.answer)
            .filter_map(|(i, letter)| Some((self.origin.offset(self.direction, i)?, *letter)))
    }

    /// Iterates the cells of the span.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.span().map(|(pos, _)| pos)
    }

    /// Returns the offset of `pos` within the span, if the span contains it.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let (fixed, origin_fixed, moving, origin_moving) = match self.direction {
            Direction::Across => (pos.row(), self.origin.row(), pos.col(), self.origin.col()),
            Direction::Down => (pos.col(), self.origin.col(), pos.row(), self.origin.row()),
        };
        if fixed != origin_fixed || moving < origin_moving {
            return None;
        }
        let index = usize::from(moving - origin_moving);
        (index < self.answer.len()).then_some(index)
    }

    /// Returns whether the span contains `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the letter this clue expects at `pos`.
    #[must_use]
    pub fn expected_at(&self, pos: Position) -> Option<Letter> {
        self.index_of(pos).map(|index| self.answer[index])
    }
}
