use eframe::Storage;
use heartword_game::{Game, GameError};
use heartword_puzzle::Puzzle;

use crate::{
    persistence::grid_dto::{GridDto, GridDtoError},
    state::AppState,
};

pub(crate) const STORAGE_KEY: &str = "crossword_progress";

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum RestoreError {
    #[display("malformed grid: {source}")]
    Grid { source: GridDtoError },
    #[display("grid does not fit the puzzle: {source}")]
    Game { source: GameError },
}

pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let Some(dto) = eframe::get_value::<GridDto>(storage, STORAGE_KEY) else {
        if storage.get_string(STORAGE_KEY).is_some() {
            log::warn!("saved crossword progress could not be decoded, starting fresh");
        }
        return None;
    };
    match restore_game(dto) {
        Ok(game) => {
            log::info!(
                "restored crossword progress with {} letters",
                game.grid().filled_count()
            );
            Some(AppState::new(game))
        }
        Err(err) => {
            log::warn!("discarding saved crossword progress: {err}");
            None
        }
    }
}

fn restore_game(dto: GridDto) -> Result<Game, RestoreError> {
    let puzzle = Puzzle::keepsake();
    let grid = dto.try_into_grid(puzzle.size())?;
    Ok(Game::from_filled(puzzle, grid)?)
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(storage, STORAGE_KEY, &GridDto::from(app_state.game.grid()));
}

/// Saves and flushes the grid if it changed since the last save.
///
/// Native file storage only writes to disk on `flush`, so every change is
/// flushed right away instead of waiting for the autosave interval.
pub(crate) fn persist_if_dirty(storage: &mut dyn Storage, app_state: &mut AppState) {
    if !app_state.is_dirty() {
        return;
    }
    save_state(storage, app_state);
    storage.flush();
    app_state.clear_dirty();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use heartword_core::{Letter, Position};

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn empty_storage_has_no_state() {
        let storage = MemoryStorage::default();
        assert!(load_state(&storage).is_none());
    }

    #[test]
    fn saved_grid_is_restored_with_fresh_session() {
        let mut game = Game::new(Puzzle::keepsake());
        game.select_cell(Position::new(0, 0));
        game.enter_letter(Letter::from_char('L').unwrap());
        game.reveal_letter();
        let mut app_state = AppState::new(game);
        app_state.mark_dirty();

        let mut storage = MemoryStorage::default();
        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();

        assert_eq!(restored.game.grid(), app_state.game.grid());
        assert_eq!(restored.game.selected_cell(), None);
        assert_eq!(
            restored.game.reveal_budget(),
            heartword_game::DEFAULT_REVEAL_BUDGET
        );
        assert!(!restored.is_dirty());
    }

    #[test]
    fn dirty_state_is_saved_and_flushed_once() {
        let mut app_state = AppState::new(Game::new(Puzzle::keepsake()));
        let mut storage = MemoryStorage::default();

        persist_if_dirty(&mut storage, &mut app_state);
        assert_eq!(storage.flushes, 0);
        assert!(storage.get_string(STORAGE_KEY).is_none());

        app_state.game.select_cell(Position::new(0, 0));
        app_state.game.enter_letter(Letter::from_char('L').unwrap());
        app_state.mark_dirty();
        persist_if_dirty(&mut storage, &mut app_state);
        assert_eq!(storage.flushes, 1);
        assert!(!app_state.is_dirty());
        let restored = load_state(&storage).unwrap();
        assert_eq!(
            restored.game.cell(Position::new(0, 0)),
            Some(Letter::from_char('L').unwrap())
        );

        persist_if_dirty(&mut storage, &mut app_state);
        assert_eq!(storage.flushes, 1, "clean state is not flushed again");
    }

    #[test]
    fn undecodable_value_is_discarded() {
        let mut storage = MemoryStorage::default();
        storage.set_string(STORAGE_KEY, "not a grid".to_owned());
        assert!(load_state(&storage).is_none());
    }

    #[test]
    fn letter_on_black_square_is_discarded() {
        let puzzle = Puzzle::keepsake();
        let mut grid = puzzle.solution().clone();
        grid.set(Position::new(1, 1), Some(Letter::from_char('X').unwrap()));
        let mut storage = MemoryStorage::default();
        eframe::set_value(&mut storage, STORAGE_KEY, &GridDto::from(&grid));

        assert!(load_state(&storage).is_none());
        assert!(matches!(
            restore_game(GridDto::from(&grid)),
            Err(RestoreError::Game {
                source: GameError::BlackSquareFilled { .. }
            })
        ));
    }

    #[test]
    fn wrong_size_is_discarded() {
        let grid = heartword_core::LetterGrid::new(5);
        assert!(matches!(
            restore_game(GridDto::from(&grid)),
            Err(RestoreError::Grid {
                source: GridDtoError::RowCount { .. }
            })
        ));
    }
}
