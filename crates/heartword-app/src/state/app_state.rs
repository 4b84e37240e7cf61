use heartword_game::Game;

use crate::state::Settings;

// AppState holds the game session and settings. Only the letter grid is persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: Game) -> Self {
        Self {
            game,
            settings: Settings::default(),
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
