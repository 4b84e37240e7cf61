use heartword_core::Direction;

/// Result of [`Game::select_cell`](crate::Game::select_cell) and
/// [`Game::move_selection`](crate::Game::move_selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectOutcome {
    /// The cell is a black square or outside the grid; nothing changed.
    NoOp,
    /// A different cell became the selection. The direction is unchanged.
    Selected,
    /// The already-selected cell was chosen again and the direction flipped.
    DirectionToggled,
}

/// Result of a letter input operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOperation {
    /// Nothing changed.
    NoOp,
    /// A letter was written.
    Set,
    /// A letter was cleared.
    Removed,
}

/// Arrow-key movement of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Outcome of comparing a word against its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CheckResult {
    /// Every cell of the span holds the expected letter.
    Correct,
    /// At least one cell is empty or wrong.
    Incorrect,
}

/// The result of [`Game::check_word`](crate::Game::check_word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCheck {
    /// Label of the checked clue.
    pub number: u16,
    /// Direction of the checked clue.
    pub direction: Direction,
    /// Whether the word matched its answer.
    pub result: CheckResult,
}

impl WordCheck {
    /// Returns whether the checked word is correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.result.is_correct()
    }
}
