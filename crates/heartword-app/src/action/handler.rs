use heartword_core::{Direction, Position};

use crate::{
    action::{
        Action, ActionRequestQueue, AppAction, BoardAction, ModalRequest, PuzzleAction,
        SelectionAction, SettingsAction, UiAction,
    },
    state::{AppState, CelebrationState, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    let grid_before = ctx.app_state.game.grid().clone();
    let was_complete = ctx.app_state.game.is_complete();

    match action {
        Action::App(AppAction::Board(action)) => ctx.handle_board(action),
        Action::App(AppAction::Selection(action)) => ctx.handle_selection(action),
        Action::App(AppAction::Puzzle(action)) => ctx.handle_puzzle(action),
        Action::App(AppAction::Settings(SettingsAction::UpdateSettings(settings))) => {
            ctx.app_state.settings = settings;
        }
        Action::Ui(action) => ctx.handle_ui(action),
    }

    if ctx.app_state.game.grid() != &grid_before {
        ctx.app_state.mark_dirty();
        if !was_complete && ctx.app_state.game.is_complete() {
            log::info!("crossword completed");
            ctx.ui_state.celebration.request();
        }
    }
}

impl ActionContext<'_> {
    fn handle_board(&mut self, action: BoardAction) {
        let game = &mut self.app_state.game;
        match action {
            BoardAction::EnterLetter(letter) => {
                game.enter_letter(letter);
            }
            BoardAction::Backspace => {
                game.backspace();
            }
            BoardAction::RevealLetter => {
                if game.reveal_letter().is_none() && game.reveal_budget() > 0 {
                    log::debug!("nothing to reveal at {:?}", game.selected_cell());
                }
            }
        }
    }

    fn handle_selection(&mut self, action: SelectionAction) {
        let game = &mut self.app_state.game;
        let outcome = match action {
            SelectionAction::SelectCell(pos) => game.select_cell(pos),
            SelectionAction::SelectClue { origin, direction } => {
                self.select_clue(origin, direction);
                return;
            }
            SelectionAction::ToggleDirection => match game.selected_cell() {
                Some(pos) => game.select_cell(pos),
                None => return,
            },
            SelectionAction::MoveSelection(movement) => {
                game.move_selection(movement);
                return;
            }
        };
        if !outcome.is_no_op() {
            self.ui_state.keypad_open = true;
        }
    }

    fn select_clue(&mut self, origin: Position, direction: Direction) {
        let game = &mut self.app_state.game;
        if game.selected_cell() != Some(origin) && game.select_cell(origin).is_no_op() {
            return;
        }
        if game.direction() != direction {
            game.select_cell(origin);
        }
        self.ui_state.keypad_open = true;
    }

    fn handle_puzzle(&mut self, action: PuzzleAction) {
        match action {
            PuzzleAction::CheckWord => match self.app_state.game.check_word() {
                Some(check) => {
                    log::debug!(
                        "checked {} {}: {:?}",
                        check.number,
                        check.direction,
                        check.result
                    );
                    self.ui_state.active_modal = Some(ModalRequest::WordCheck(check));
                }
                None => log::debug!("no word to check for the current selection"),
            },
            PuzzleAction::ResetPuzzle => {
                log::info!("resetting crossword progress");
                self.app_state.game.reset();
                self.ui_state.keypad_open = false;
                self.ui_state.celebration = CelebrationState::Idle;
            }
        }
    }

    fn handle_ui(&mut self, action: UiAction) {
        match action {
            UiAction::OpenModal(modal_request) => {
                self.ui_state.active_modal = Some(modal_request);
            }
            UiAction::CloseModal => {
                self.ui_state.active_modal = None;
            }
            UiAction::CloseKeypad => {
                self.ui_state.keypad_open = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use heartword_core::{Direction, Letter, Position};
    use heartword_game::{CheckResult, Game, Movement};
    use heartword_puzzle::Puzzle;

    use super::{handle, handle_all};
    use crate::{
        action::{
            Action, ActionRequestQueue, BoardAction, ModalRequest, PuzzleAction, SelectionAction,
            SettingsAction, UiAction,
        },
        state::{AppState, CelebrationState, Settings, UiState},
    };

    fn fresh_state() -> (AppState, UiState) {
        (AppState::new(Game::new(Puzzle::keepsake())), UiState::new())
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn type_word(app_state: &mut AppState, ui_state: &mut UiState, word: &str) {
        for ch in word.chars() {
            handle(
                app_state,
                ui_state,
                BoardAction::EnterLetter(letter(ch)).into(),
            );
        }
    }

    #[test]
    fn select_cell_opens_keypad() {
        let (mut app_state, mut ui_state) = fresh_state();

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(1, 1)).into(),
        );
        assert!(!ui_state.keypad_open, "black squares are not selectable");

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(0, 0)).into(),
        );
        assert!(ui_state.keypad_open);
        assert!(!app_state.is_dirty(), "selection alone is not persisted");

        handle(&mut app_state, &mut ui_state, UiAction::CloseKeypad.into());
        assert!(!ui_state.keypad_open);
    }

    #[test]
    fn letter_entry_marks_dirty() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(0, 0)).into(),
        );
        type_word(&mut app_state, &mut ui_state, "L");
        assert!(app_state.is_dirty());
        assert_eq!(app_state.game.cell(Position::new(0, 0)), Some(letter('L')));

        app_state.clear_dirty();
        handle(&mut app_state, &mut ui_state, BoardAction::Backspace.into());
        assert!(!app_state.is_dirty(), "backspace on an empty cell changes nothing");
    }

    #[test]
    fn toggle_direction_reselects_current_cell() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::ToggleDirection.into(),
        );
        assert_eq!(app_state.game.selected_cell(), None);

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(2, 4)).into(),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::ToggleDirection.into(),
        );
        assert!(app_state.game.direction().is_down());
        assert_eq!(app_state.game.selected_cell(), Some(Position::new(2, 4)));
    }

    #[test]
    fn select_clue_sets_origin_and_direction() {
        let (mut app_state, mut ui_state) = fresh_state();
        let origin = Position::new(0, 6);
        for direction in [Direction::Down, Direction::Down, Direction::Across] {
            handle(
                &mut app_state,
                &mut ui_state,
                SelectionAction::SelectClue { origin, direction }.into(),
            );
            assert_eq!(app_state.game.selected_cell(), Some(origin));
            assert_eq!(app_state.game.direction(), direction);
        }
        assert!(ui_state.keypad_open);
    }

    #[test]
    fn move_selection_steps_over_black_squares() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(0, 1)).into(),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::MoveSelection(Movement::Down).into(),
        );
        assert_eq!(app_state.game.selected_cell(), Some(Position::new(2, 1)));
    }

    #[test]
    fn check_word_opens_result_modal() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(1, 0)).into(),
        );
        handle(&mut app_state, &mut ui_state, PuzzleAction::CheckWord.into());
        assert!(
            ui_state.active_modal.is_none(),
            "(1, 0) has no across word"
        );

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::ToggleDirection.into(),
        );
        handle(&mut app_state, &mut ui_state, PuzzleAction::CheckWord.into());
        let Some(ModalRequest::WordCheck(check)) = ui_state.active_modal else {
            panic!("expected a word check modal, got {:?}", ui_state.active_modal);
        };
        assert_eq!(check.number, 1);
        assert_eq!(check.result, CheckResult::Incorrect);

        handle(&mut app_state, &mut ui_state, UiAction::CloseModal.into());
        assert!(ui_state.active_modal.is_none());
    }

    #[test]
    fn completion_requests_celebration_once() {
        let puzzle = Puzzle::keepsake();
        let mut filled = puzzle.solution().clone();
        let last = Position::new(10, 8);
        filled.set(last, None);
        let mut app_state = AppState::new(Game::from_filled(puzzle, filled).unwrap());
        let mut ui_state = UiState::new();

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(last).into(),
        );
        type_word(&mut app_state, &mut ui_state, "R");
        assert!(app_state.game.is_complete());
        assert!(ui_state.celebration.is_requested());

        ui_state.celebration = CelebrationState::Idle;
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(0, 4)).into(),
        );
        type_word(&mut app_state, &mut ui_state, "Z");
        assert!(
            ui_state.celebration.is_idle(),
            "already complete, no new transition"
        );
    }

    #[test]
    fn reveal_spends_budget_and_marks_dirty() {
        let (mut app_state, mut ui_state) = fresh_state();
        let mut queue = ActionRequestQueue::default();
        queue.request(SelectionAction::SelectCell(Position::new(6, 3)).into());
        queue.request(BoardAction::RevealLetter.into());
        handle_all(&mut app_state, &mut ui_state, &mut queue);

        assert_eq!(app_state.game.cell(Position::new(6, 3)), Some(letter('H')));
        assert_eq!(app_state.game.reveal_budget(), 2);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn reset_clears_grid_and_ui() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::SelectCell(Position::new(0, 0)).into(),
        );
        type_word(&mut app_state, &mut ui_state, "LOVE");
        app_state.clear_dirty();

        handle(&mut app_state, &mut ui_state, PuzzleAction::ResetPuzzle.into());
        assert!(app_state.game.grid().is_blank());
        assert!(!ui_state.keypad_open);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn update_settings_replaces_settings() {
        let (mut app_state, mut ui_state) = fresh_state();
        let mut settings = Settings::default();
        settings.display.show_clue_numbers = false;

        handle(
            &mut app_state,
            &mut ui_state,
            Action::from(SettingsAction::UpdateSettings(settings.clone())),
        );
        assert_eq!(app_state.settings, settings);
        assert!(!app_state.is_dirty());
    }
}
