use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};
use heartword_game::{CheckResult, WordCheck};

use crate::{
    action::{ActionRequestQueue, PuzzleAction, UiAction},
    ui::icon,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: String) -> Response {
    let response = ui.button(label);
    request_focus_if_none(ui, &response);
    response
}

fn word_check_message(result: CheckResult) -> (&'static str, &'static str) {
    match result {
        CheckResult::Correct => (icon::CHECK, "Correct!"),
        CheckResult::Incorrect => (icon::CROSS, "Not quite right. Keep trying!"),
    }
}

pub(crate) fn show_word_check(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    check: WordCheck,
) {
    let (mark, message) = word_check_message(check.result);
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("word_check_result"),
        format!("{} {}", check.number, check.direction),
        |ui: &mut Ui| {
            let color = if check.is_correct() {
                ui.visuals().warn_fg_color
            } else {
                ui.visuals().error_fg_color
            };
            ui.label(RichText::new(format!("{mark} {message}")).color(color));
        },
        |ui: &mut Ui| {
            if primary_button(ui, "OK".to_owned()).clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}

pub(crate) fn show_reset_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("reset_confirm"),
        "Reset Puzzle?",
        |ui: &mut Ui| {
            ui.label("Clear every letter and start over? Your reveals are not refunded.");
        },
        |ui: &mut Ui| {
            let confirm = primary_button(ui, format!("{} Reset", icon::TRASH));
            if confirm.clicked() {
                action_queue.request(PuzzleAction::ResetPuzzle.into());
                ui.close();
            }

            let cancel = ui.button(format!("{} Cancel", icon::CANCEL));
            if cancel.clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_check_messages() {
        assert_eq!(
            word_check_message(CheckResult::Correct),
            (icon::CHECK, "Correct!")
        );
        assert_eq!(
            word_check_message(CheckResult::Incorrect).1,
            "Not quite right. Keep trying!"
        );
    }
}
