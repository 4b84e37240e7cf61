use eframe::egui::{RichText, ScrollArea, Ui};
use heartword_core::{Direction, Position};

use crate::action::{ActionRequestQueue, SelectionAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueRow {
    pub(crate) number: u16,
    pub(crate) text: String,
    pub(crate) origin: Position,
    pub(crate) direction: Direction,
    pub(crate) active: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct ClueListViewModel {
    pub(crate) across: Vec<ClueRow>,
    pub(crate) down: Vec<ClueRow>,
}

pub(crate) fn show(ui: &mut Ui, vm: &ClueListViewModel, action_queue: &mut ActionRequestQueue) {
    ScrollArea::vertical()
        .id_salt("clue_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.columns(2, |columns| {
                show_section(&mut columns[0], "Across", &vm.across, action_queue);
                show_section(&mut columns[1], "Down", &vm.down, action_queue);
            });
        });
}

fn show_section(
    ui: &mut Ui,
    heading: &str,
    rows: &[ClueRow],
    action_queue: &mut ActionRequestQueue,
) {
    ui.heading(heading);
    ui.add_space(2.0);
    for row in rows {
        let text = RichText::new(format!("{}. {}", row.number, row.text));
        let response = ui.selectable_label(row.active, text);
        if response.clicked() {
            action_queue.request(
                SelectionAction::SelectClue {
                    origin: row.origin,
                    direction: row.direction,
                }
                .into(),
            );
        }
    }
}
