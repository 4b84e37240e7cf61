use eframe::egui::{Button, Ui};

use crate::{
    action::{
        ActionRequestQueue, BoardAction, ModalRequest, PuzzleAction, SelectionAction, UiAction,
    },
    ui::icon,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ControlsViewModel {
    pub(crate) reveal_budget: u8,
    pub(crate) has_selection: bool,
}

impl ControlsViewModel {
    fn can_reveal(self) -> bool {
        self.reveal_budget > 0 && self.has_selection
    }
}

pub(crate) fn show(ui: &mut Ui, vm: ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal_wrapped(|ui| {
        let reveal = Button::new(format!("{} Reveal ({})", icon::LIGHTBULB, vm.reveal_budget));
        if ui
            .add_enabled(vm.can_reveal(), reveal)
            .on_hover_text("Fill the selected cell with its answer")
            .clicked()
        {
            action_queue.request(BoardAction::RevealLetter.into());
        }

        let toggle = Button::new(format!("{} Direction", icon::SWAP));
        if ui
            .add_enabled(vm.has_selection, toggle)
            .on_hover_text("Switch between across and down")
            .clicked()
        {
            action_queue.request(SelectionAction::ToggleDirection.into());
        }

        let check = Button::new(format!("{} Check Word", icon::CHECK));
        if ui.add_enabled(vm.has_selection, check).clicked() {
            action_queue.request(PuzzleAction::CheckWord.into());
        }

        if ui.button(format!("{} Reset", icon::TRASH)).clicked() {
            action_queue.request(UiAction::OpenModal(ModalRequest::ResetConfirm).into());
        }

        if ui.button(format!("{} Settings", icon::GEAR)).clicked() {
            action_queue.request(UiAction::OpenModal(ModalRequest::Settings).into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_needs_budget_and_selection() {
        let vm = |reveal_budget, has_selection| ControlsViewModel {
            reveal_budget,
            has_selection,
        };
        assert!(vm(3, true).can_reveal());
        assert!(!vm(0, true).can_reveal());
        assert!(!vm(3, false).can_reveal());
    }
}
