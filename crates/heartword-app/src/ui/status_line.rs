use eframe::egui::{Label, RichText, Ui, Widget as _};
use heartword_core::Direction;

use crate::ui::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    InProgress,
    Complete,
}

#[derive(Debug, Clone)]
pub(crate) struct ActiveClue {
    pub(crate) number: u16,
    pub(crate) direction: Direction,
    pub(crate) text: String,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
    active_clue: Option<ActiveClue>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: GameStatus, active_clue: Option<ActiveClue>) -> Self {
        Self {
            status,
            active_clue,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(format!("{} Crossword", icon::HEART)).size(28.0));
        let (subtitle, color) = match vm.status {
            GameStatus::InProgress => (
                "Fill in all the words".to_owned(),
                ui.visuals().weak_text_color(),
            ),
            GameStatus::Complete => (
                format!("{} Puzzle Complete!", icon::PARTY),
                ui.visuals().warn_fg_color,
            ),
        };
        ui.label(RichText::new(subtitle).color(color).size(16.0));

        let clue_text = match &vm.active_clue {
            Some(clue) => format!("{} {}: {}", clue.number, clue.direction, clue.text),
            None => "Select a cell to start".to_owned(),
        };
        Label::new(RichText::new(clue_text).strong().size(16.0))
            .wrap()
            .ui(ui);
    });
}
