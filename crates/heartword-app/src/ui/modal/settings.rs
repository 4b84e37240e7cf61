use eframe::egui::{Context, Id, Modal, Sides, widgets};

use crate::{
    action::{ActionRequestQueue, SettingsAction, UiAction},
    state::{DisplaySettings, Settings},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel {
    settings: Settings,
}

impl SettingsViewModel {
    #[must_use]
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings.clone();
    let mut changed = false;

    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.add_space(4.0);

        ui.label(format!("{} Display", icon::PENCIL));
        ui.indent("display", |ui| {
            let Settings { display } = &mut settings;
            let DisplaySettings {
                highlight_selected_word,
                show_clue_numbers,
            } = display;
            changed |= ui
                .checkbox(highlight_selected_word, "Highlight the selected word")
                .changed();
            changed |= ui
                .checkbox(show_clue_numbers, "Show clue numbers in the grid")
                .changed();
        });

        ui.label(format!("{} Appearance", icon::PALETTE));
        ui.indent("appearance", |ui| {
            widgets::global_theme_preference_buttons(ui);
        });
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                if ui.button(format!("{} Close", icon::CHECK)).clicked() {
                    ui.close();
                }
            },
        );
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
    if modal.should_close() {
        action_queue.request(UiAction::CloseModal.into());
    }
}
