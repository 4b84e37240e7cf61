use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        clue_list::{self, ClueListViewModel},
        controls::{self, ControlsViewModel},
        grid::{self, GridViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

const STATUS_HEIGHT: f32 = 96.0;
const CONTROLS_HEIGHT: f32 = 36.0;
const GRID_WIDTH_SHARE: f32 = 0.6;
const MIN_CLUE_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) grid_vm: GridViewModel,
    pub(crate) clue_list_vm: ClueListViewModel,
    pub(crate) controls_vm: ControlsViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let board_height = available.y - STATUS_HEIGHT - CONTROLS_HEIGHT - spacing.y * 2.0;
    let board_width = f32::min(
        available.x * GRID_WIDTH_SHARE,
        available.x - MIN_CLUE_WIDTH - spacing.x,
    );
    let grid_side = f32::max(f32::min(board_height, board_width), 0.0);
    let cell_size = grid_side / (f32::from(vm.grid_vm.size()) + 0.2);

    StripBuilder::new(ui)
        .size(Size::exact(STATUS_HEIGHT))
        .size(Size::remainder())
        .size(Size::exact(CONTROLS_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_line_vm);
            });
            strip.strip(|builder| {
                builder
                    .size(Size::exact(grid::grid_side(cell_size, vm.grid_vm.size())))
                    .size(Size::remainder().at_least(MIN_CLUE_WIDTH))
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, cell_size, action_queue);
                        });
                        strip.cell(|ui| {
                            clue_list::show(ui, &vm.clue_list_vm, action_queue);
                        });
                    });
            });
            strip.cell(|ui| {
                controls::show(ui, vm.controls_vm, action_queue);
            });
        });
}
