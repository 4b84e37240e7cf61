use std::mem;

use heartword_core::{Direction, Letter, Position};
use heartword_game::{Movement, WordCheck};

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Board(BoardAction),
    Selection(SelectionAction),
    Puzzle(PuzzleAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum BoardAction {
    EnterLetter(Letter),
    Backspace,
    RevealLetter,
}

#[derive(Debug)]
pub(crate) enum SelectionAction {
    SelectCell(Position),
    SelectClue {
        origin: Position,
        direction: Direction,
    },
    ToggleDirection,
    MoveSelection(Movement),
}

#[derive(Debug)]
pub(crate) enum PuzzleAction {
    CheckWord,
    ResetPuzzle,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    CloseKeypad,
}

impl From<BoardAction> for Action {
    fn from(action: BoardAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SelectionAction> for Action {
    fn from(action: SelectionAction) -> Self {
        Action::App(action.into())
    }
}

impl From<PuzzleAction> for Action {
    fn from(action: PuzzleAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalRequest {
    WordCheck(WordCheck),
    ResetConfirm,
    Settings,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(SelectionAction::ToggleDirection.into());
        queue.request(BoardAction::Backspace.into());
        queue.request(UiAction::CloseKeypad.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 3);
        assert!(matches!(
            drained[0],
            Action::App(AppAction::Selection(SelectionAction::ToggleDirection))
        ));
        assert!(matches!(
            drained[1],
            Action::App(AppAction::Board(BoardAction::Backspace))
        ));
        assert!(matches!(drained[2], Action::Ui(UiAction::CloseKeypad)));

        assert!(queue.take_all().is_empty());
    }
}
