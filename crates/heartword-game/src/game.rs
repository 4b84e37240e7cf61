use heartword_core::{Direction, Letter, LetterGrid, Position};
use heartword_puzzle::{ClueEntry, Puzzle};

use crate::{CheckResult, GameError, InputOperation, Movement, SelectOutcome, WordCheck};

/// Number of letters a player may reveal per session.
pub const DEFAULT_REVEAL_BUDGET: u8 = 3;

/// A crossword game session.
///
/// Owns the puzzle definition, the player's letter grid, the selected cell
/// with its input direction, and the remaining reveal budget.
///
/// Once a cell is selected there is no operation that clears the selection
/// other than [`Game::reset`].
///
/// # Example
///
/// ```
/// use heartword_core::{Direction, Position};
/// use heartword_game::{Game, SelectOutcome};
/// use heartword_puzzle::Puzzle;
///
/// let mut game = Game::new(Puzzle::keepsake());
/// let pos = Position::new(2, 0);
///
/// assert_eq!(game.select_cell(pos), SelectOutcome::Selected);
/// assert_eq!(game.direction(), Direction::Across);
/// assert_eq!(game.select_cell(pos), SelectOutcome::DirectionToggled);
/// assert_eq!(game.direction(), Direction::Down);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    grid: LetterGrid,
    selected_cell: Option<Position>,
    direction: Direction,
    reveal_budget: u8,
}

impl Game {
    /// Creates a new game with an empty grid.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let grid = LetterGrid::new(puzzle.size());
        Self {
            puzzle,
            grid,
            selected_cell: None,
            direction: Direction::default(),
            reveal_budget: DEFAULT_REVEAL_BUDGET,
        }
    }

    /// Creates a game from previously saved letters.
    ///
    /// The selection starts empty and the reveal budget starts full.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SizeMismatch`] if `filled` does not match the puzzle
    /// size, and [`GameError::BlackSquareFilled`] if it holds a letter on a
    /// black square.
    pub fn from_filled(puzzle: Puzzle, filled: LetterGrid) -> Result<Self, GameError> {
        if filled.size() != puzzle.size() {
            return Err(GameError::SizeMismatch {
                expected: puzzle.size(),
                found: filled.size(),
            });
        }
        if let Some((position, _)) = filled.letters().find(|(pos, _)| puzzle.is_black(*pos)) {
            return Err(GameError::BlackSquareFilled { position });
        }

        let mut this = Self::new(puzzle);
        this.grid = filled;
        Ok(this)
    }

    /// Returns the puzzle definition.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the player's letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the letter at `pos`, if any.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Letter> {
        self.grid.get(pos)
    }

    /// Returns whether `pos` is a black square.
    #[must_use]
    pub fn is_black(&self, pos: Position) -> bool {
        self.puzzle.is_black(pos)
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected_cell
    }

    /// Returns the input direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of reveals left.
    #[must_use]
    pub fn reveal_budget(&self) -> u8 {
        self.reveal_budget
    }

    /// Returns the clue running in the current direction through the selected cell.
    #[must_use]
    pub fn selected_clue(&self) -> Option<&ClueEntry> {
        let pos = self.selected_cell?;
        self.puzzle.clue_containing(pos, self.direction)
    }

    /// Returns whether `pos` belongs to the word of [`Game::selected_clue`].
    #[must_use]
    pub fn is_in_selected_word(&self, pos: Position) -> bool {
        self.selected_clue().is_some_and(|clue| clue.contains(pos))
    }

    /// Selects a cell.
    ///
    /// Choosing the selected cell again flips the direction. Choosing another
    /// cell moves the selection and keeps the direction. Black squares and
    /// positions outside the grid are ignored.
    pub fn select_cell(&mut self, pos: Position) -> SelectOutcome {
        if !pos.is_within(self.puzzle.size()) || self.is_black(pos) {
            return SelectOutcome::NoOp;
        }
        if self.selected_cell == Some(pos) {
            self.direction.toggle();
            return SelectOutcome::DirectionToggled;
        }
        self.selected_cell = Some(pos);
        SelectOutcome::Selected
    }

    /// Moves the selection one cell, stepping over black squares.
    ///
    /// With no selection, the first playable cell in row-major order is
    /// selected. Movement off the grid edge is a no-op.
    pub fn move_selection(&mut self, movement: Movement) -> SelectOutcome {
        let Some(mut pos) = self.selected_cell else {
            return self
                .first_playable()
                .map_or(SelectOutcome::NoOp, |pos| self.select_cell(pos));
        };
        let size = self.puzzle.size();
        loop {
            let next = match movement {
                Movement::Up => pos.up(),
                Movement::Down => pos.down(size),
                Movement::Left => pos.left(),
                Movement::Right => pos.right(size),
            };
            let Some(next) = next else {
                return SelectOutcome::NoOp;
            };
            if !self.is_black(next) {
                return self.select_cell(next);
            }
            pos = next;
        }
    }

    fn first_playable(&self) -> Option<Position> {
        Position::all(self.puzzle.size()).find(|pos| !self.is_black(*pos))
    }

    /// Writes `letter` into the selected cell and advances the selection.
    ///
    /// The selection moves to the next playable cell in the current direction,
    /// stepping over black squares. If the grid edge comes first, the
    /// selection stays where it is.
    ///
    /// Returns [`InputOperation::NoOp`] only when nothing is selected; writing
    /// the letter a cell already holds still reports [`InputOperation::Set`].
    pub fn enter_letter(&mut self, letter: Letter) -> InputOperation {
        let Some(pos) = self.selected_cell else {
            return InputOperation::NoOp;
        };
        self.grid.set(pos, Some(letter));
        if let Some(next) = self.next_playable(pos, self.direction) {
            self.selected_cell = Some(next);
        }
        InputOperation::Set
    }

    fn next_playable(&self, from: Position, direction: Direction) -> Option<Position> {
        let size = self.puzzle.size();
        let mut pos = from.next(direction, size)?;
        while self.is_black(pos) {
            pos = pos.next(direction, size)?;
        }
        Some(pos)
    }

    /// Clears the selected cell. The selection does not move.
    pub fn backspace(&mut self) -> InputOperation {
        let Some(pos) = self.selected_cell else {
            return InputOperation::NoOp;
        };
        if self.grid.get(pos).is_none() {
            return InputOperation::NoOp;
        }
        self.grid.set(pos, None);
        InputOperation::Removed
    }

    /// Writes the expected letter into the selected cell and spends one reveal.
    ///
    /// The letter comes from the first clue in declaration order containing the
    /// cell, whatever its direction. Returns `None` without spending anything
    /// when the budget is exhausted, nothing is selected, or no clue covers the
    /// cell. A cell that already holds the right letter still costs a reveal.
    pub fn reveal_letter(&mut self) -> Option<Letter> {
        if self.reveal_budget == 0 {
            log::debug!("reveal ignored: budget exhausted");
            return None;
        }
        let pos = self.selected_cell?;
        let letter = self.puzzle.expected_letter(pos)?;
        self.grid.set(pos, Some(letter));
        self.reveal_budget = self.reveal_budget.saturating_sub(1);
        log::debug!(
            "revealed {letter} at {pos}, {} reveals left",
            self.reveal_budget
        );
        Some(letter)
    }

    /// Compares the selected word against its answer.
    ///
    /// Only the clue running in the current direction is considered. Returns
    /// `None` when nothing is selected or when the selected cell belongs only
    /// to a clue in the other direction.
    #[must_use]
    pub fn check_word(&self) -> Option<WordCheck> {
        let clue = self.selected_clue()?;
        let result = if self.is_word_correct(clue) {
            CheckResult::Correct
        } else {
            CheckResult::Incorrect
        };
        Some(WordCheck {
            number: clue.number(),
            direction: clue.direction(),
            result,
        })
    }

    fn is_word_correct(&self, clue: &ClueEntry) -> bool {
        clue.span()
            .all(|(pos, expected)| self.grid.get(pos) == Some(expected))
    }

    /// Returns whether every clue's span holds its answer.
    ///
    /// Cells no clue covers are ignored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.puzzle
            .clues()
            .iter()
            .all(|clue| self.is_word_correct(clue))
    }

    /// Clears every cell and the selection. The reveal budget is kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.selected_cell = None;
        self.direction = Direction::default();
    }
}
