use eframe::egui::{Align, Button, Context, Layout, RichText, TopBottomPanel, Ui, Vec2};
use heartword_core::Letter;

use crate::{
    action::{ActionRequestQueue, BoardAction, UiAction},
    ui::icon,
};

const KEY_SIZE: Vec2 = Vec2::new(36.0, 36.0);

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeypadViewModel {
    can_input: bool,
}

impl KeypadViewModel {
    #[must_use]
    pub(crate) fn new(can_input: bool) -> Self {
        Self { can_input }
    }
}

pub(crate) fn show(ctx: &Context, vm: KeypadViewModel, action_queue: &mut ActionRequestQueue) {
    TopBottomPanel::bottom("keypad")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.strong("Enter Letter");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(icon::CANCEL)
                        .on_hover_text("Close keypad")
                        .clicked()
                    {
                        action_queue.request(UiAction::CloseKeypad.into());
                    }
                });
            });
            ui.separator();
            ui.add_enabled_ui(vm.can_input, |ui| {
                show_keys(ui, action_queue);
            });
            ui.add_space(4.0);
        });
}

fn show_keys(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    ui.horizontal_wrapped(|ui| {
        for letter in Letter::ALL {
            let button = Button::new(RichText::new(letter.as_str()).size(18.0)).min_size(KEY_SIZE);
            if ui.add(button).clicked() {
                action_queue.request(BoardAction::EnterLetter(letter).into());
            }
        }
        let backspace = Button::new(RichText::new(format!("{} Backspace", icon::BACKSPACE)))
            .min_size(Vec2::new(KEY_SIZE.x * 3.0, KEY_SIZE.y));
        if ui.add(backspace).clicked() {
            action_queue.request(BoardAction::Backspace.into());
        }
    });
}
