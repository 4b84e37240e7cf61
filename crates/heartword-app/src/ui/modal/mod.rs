use eframe::egui::Context;

pub(crate) use self::settings::SettingsViewModel;
use crate::action::{ActionRequestQueue, ModalRequest};

mod dialogs;
mod settings;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: ModalRequest,
    settings_vm: &SettingsViewModel,
) {
    match modal_request {
        ModalRequest::WordCheck(check) => {
            dialogs::show_word_check(ctx, action_queue, check);
        }
        ModalRequest::ResetConfirm => {
            dialogs::show_reset_confirm(ctx, action_queue);
        }
        ModalRequest::Settings => {
            settings::show(ctx, settings_vm, action_queue);
        }
    }
}
