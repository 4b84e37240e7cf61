use heartword_core::{Direction, Position};
use heartword_game::Game;
use heartword_puzzle::ClueEntry;

use crate::{
    state::{AppState, UiState},
    ui::{
        clue_list::{ClueListViewModel, ClueRow},
        controls::ControlsViewModel,
        game_screen::GameScreenViewModel,
        grid::{CellContent, GridCell, GridViewModel, GridVisualState},
        keypad::KeypadViewModel,
        modal::SettingsViewModel,
        status_line::{ActiveClue, GameStatus, StatusLineViewModel},
    },
};

fn build_grid(game: &Game) -> Vec<GridCell> {
    let puzzle = game.puzzle();
    let solved = game.is_complete();
    Position::all(puzzle.size())
        .map(|pos| {
            if puzzle.is_black(pos) {
                return GridCell {
                    content: CellContent::Black,
                    number: None,
                    visual_state: GridVisualState::empty(),
                };
            }
            let mut visual_state = GridVisualState::empty();
            if game.selected_cell() == Some(pos) {
                visual_state |= GridVisualState::SELECTED;
            }
            if game.is_in_selected_word(pos) {
                visual_state |= GridVisualState::SELECTED_WORD;
            }
            if solved {
                visual_state |= GridVisualState::SOLVED;
            }
            GridCell {
                content: CellContent::Open(game.cell(pos)),
                number: puzzle.clue_number_at(pos),
                visual_state,
            }
        })
        .collect()
}

fn build_clue_rows(game: &Game, direction: Direction) -> Vec<ClueRow> {
    let selected = game.selected_clue();
    let is_active = |clue: &ClueEntry| {
        selected.is_some_and(|s| s.origin() == clue.origin() && s.direction() == clue.direction())
    };
    game.puzzle()
        .clues_in(direction)
        .map(|clue| ClueRow {
            number: clue.number(),
            text: clue.clue().to_owned(),
            origin: clue.origin(),
            direction: clue.direction(),
            active: is_active(clue),
        })
        .collect()
}

fn build_status_line_vm(game: &Game) -> StatusLineViewModel {
    let status = if game.is_complete() {
        GameStatus::Complete
    } else {
        GameStatus::InProgress
    };
    let active_clue = game.selected_clue().map(|clue| ActiveClue {
        number: clue.number(),
        direction: clue.direction(),
        text: clue.clue().to_owned(),
    });
    StatusLineViewModel::new(status, active_clue)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel {
    let game = &app_state.game;
    GameScreenViewModel {
        status_line_vm: build_status_line_vm(game),
        grid_vm: GridViewModel::new(
            game.puzzle().size(),
            build_grid(game),
            &app_state.settings.display,
        ),
        clue_list_vm: ClueListViewModel {
            across: build_clue_rows(game, Direction::Across),
            down: build_clue_rows(game, Direction::Down),
        },
        controls_vm: ControlsViewModel {
            reveal_budget: game.reveal_budget(),
            has_selection: game.selected_cell().is_some(),
        },
    }
}

#[must_use]
pub(crate) fn build_keypad_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> Option<KeypadViewModel> {
    ui_state
        .keypad_open
        .then(|| KeypadViewModel::new(app_state.game.selected_cell().is_some()))
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel {
    SettingsViewModel::new(&app_state.settings)
}

#[cfg(test)]
mod tests {
    use heartword_core::Letter;
    use heartword_puzzle::Puzzle;

    use super::*;

    fn keepsake_state() -> AppState {
        AppState::new(Game::new(Puzzle::keepsake()))
    }

    #[test]
    fn grid_marks_black_squares_numbers_and_selection() {
        let mut app_state = keepsake_state();
        app_state.game.select_cell(Position::new(0, 0));
        app_state.game.enter_letter(Letter::from_char('L').unwrap());

        let cells = build_grid(&app_state.game);
        let size = app_state.game.puzzle().size();
        let at = |row, col| &cells[Position::new(row, col).to_index(size)];

        assert_eq!(at(1, 1).content, CellContent::Black);
        assert_eq!(at(0, 0).number, Some(1));
        assert_eq!(
            at(0, 0).content,
            CellContent::Open(Some(Letter::from_char('L').unwrap()))
        );
        assert_eq!(
            at(0, 1).visual_state,
            GridVisualState::SELECTED | GridVisualState::SELECTED_WORD
        );
        assert_eq!(at(0, 3).visual_state, GridVisualState::SELECTED_WORD);
        assert_eq!(at(0, 4).visual_state, GridVisualState::empty());
        assert_eq!(at(0, 4).number, None);
    }

    #[test]
    fn solved_grid_marks_every_open_cell() {
        let puzzle = Puzzle::keepsake();
        let solution = puzzle.solution().clone();
        let app_state = AppState::new(Game::from_filled(puzzle, solution).unwrap());

        let cells = build_grid(&app_state.game);
        assert!(cells.iter().all(|cell| match cell.content {
            CellContent::Black => cell.visual_state.is_empty(),
            CellContent::Open(_) => cell.visual_state.contains(GridVisualState::SOLVED),
        }));
    }

    #[test]
    fn clue_rows_mark_active_clue_only_in_its_direction() {
        let mut app_state = keepsake_state();
        app_state.game.select_cell(Position::new(0, 0));

        let across = build_clue_rows(&app_state.game, Direction::Across);
        let down = build_clue_rows(&app_state.game, Direction::Down);
        assert_eq!(across.iter().filter(|row| row.active).count(), 1);
        assert!(across[0].active);
        assert_eq!(across[0].number, 1);
        assert!(down.iter().all(|row| !row.active));
        assert!(down.iter().any(|row| row.number == 1));
    }

    #[test]
    fn keypad_only_when_open() {
        let mut app_state = keepsake_state();
        let mut ui_state = UiState::new();
        assert!(build_keypad_view_model(&app_state, &ui_state).is_none());

        ui_state.keypad_open = true;
        app_state.game.select_cell(Position::new(0, 0));
        assert!(build_keypad_view_model(&app_state, &ui_state).is_some());
    }
}
