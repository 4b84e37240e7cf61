//! Heartword crossword application.
//!
//! # Design Notes
//! - One bundled 11×11 puzzle; progress survives restarts through eframe storage.
//! - Keyboard-driven input (letters, arrows, space, backspace) with mouse or touch
//!   selection and an on-screen keypad.
//! - Status display derived from `Game::is_complete()`.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use heartword_game::Game;
use heartword_puzzle::Puzzle;

use crate::{
    action::{self, ActionRequestQueue},
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

const CELEBRATION_REPAINT: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct HeartwordApp {
    app_state: AppState,
    ui_state: UiState,
}

impl HeartwordApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app_state = cc.storage.and_then(storage::load_state).unwrap_or_else(|| {
            log::info!("starting a fresh crossword");
            AppState::new(Game::new(Puzzle::keepsake()))
        });
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if let Some(storage) = frame.storage_mut() {
            storage::persist_if_dirty(storage, &mut self.app_state);
        }
    }
}

impl App for HeartwordApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action::handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        if let Some(keypad_vm) =
            view_model_builder::build_keypad_view_model(&self.app_state, &self.ui_state)
        {
            ui::keypad::show(ctx, keypad_vm, &mut action_queue);
        }

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(modal_request) = self.ui_state.active_modal {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::modal::show(ctx, &mut action_queue, modal_request, &settings_vm);
        }

        let now = ctx.input(|i| i.time);
        if self.ui_state.celebration.tick(now) {
            ui::celebration::show(ctx);
            ctx.request_repaint_after(CELEBRATION_REPAINT);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        if self.ui_state.celebration.is_requested() {
            ctx.request_repaint();
        }

        self.apply_persistence(frame);
    }
}
