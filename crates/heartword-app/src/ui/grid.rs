use std::sync::Arc;

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use heartword_core::{Letter, Position};

use crate::{
    action::{ActionRequestQueue, SelectionAction},
    state::DisplaySettings,
    ui::grid_theme::{GridPalette, GridTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const SELECTED_WORD = 0b0000_0010;
        const SOLVED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellContent {
    Black,
    Open(Option<Letter>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) content: CellContent,
    pub(crate) number: Option<u16>,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    size: u8,
    cells: Vec<GridCell>,
    enabled_highlights: GridVisualState,
    show_numbers: bool,
}

impl GridViewModel {
    /// `cells` is in row-major order and must hold `size * size` entries.
    #[must_use]
    pub(crate) fn new(size: u8, cells: Vec<GridCell>, display: &DisplaySettings) -> Self {
        debug_assert_eq!(cells.len(), usize::from(size) * usize::from(size));
        let mut enabled_highlights = GridVisualState::SELECTED | GridVisualState::SOLVED;
        let DisplaySettings {
            highlight_selected_word,
            show_clue_numbers,
        } = display;
        if *highlight_selected_word {
            enabled_highlights |= GridVisualState::SELECTED_WORD;
        }
        Self {
            size,
            cells,
            enabled_highlights,
            show_numbers: *show_clue_numbers,
        }
    }

    #[must_use]
    pub(crate) fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[pos.to_index(self.size)]
    }

    fn effective_visual_state(&self, state: GridVisualState) -> EffectiveGridVisualState {
        EffectiveGridVisualState(self.enabled_highlights & state)
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const OUTER_BORDER_WIDTH_RATIO: f32 = 2.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::SELECTED) {
            return palette.cell_bg_selected;
        }
        if self.0.intersects(GridVisualState::SELECTED_WORD) {
            return palette.cell_bg_selected_word;
        }
        if self.0.intersects(GridVisualState::SOLVED) {
            return palette.cell_bg_solved;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
        if self.0.intersects(GridVisualState::SELECTED) {
            Stroke::new(
                base_width * SELECTED_BORDER_WIDTH_RATIO,
                palette.border_selected,
            )
        } else {
            Stroke::new(base_width * THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
        }
    }
}

#[must_use]
pub(crate) fn grid_side(cell_size: f32, size: u8) -> f32 {
    let outer = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0) * OUTER_BORDER_WIDTH_RATIO;
    f32::from(size) * cell_size + outer * 2.0
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let side = grid_side(cell_size, vm.size);
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());

    let outer_width =
        f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0) * OUTER_BORDER_WIDTH_RATIO;
    let inner_rect = rect.shrink(outer_width);

    let painter = ui.painter();
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(outer_width, palette.border_inactive),
        StrokeKind::Inside,
    );

    let letter_font = FontId::proportional(cell_size * 0.65);
    let number_font = FontId::proportional(cell_size * 0.28);

    for pos in Position::all(vm.size) {
        let cell = vm.cell(pos);
        let vs = vm.effective_visual_state(cell.visual_state);

        let cell_min = inner_rect.min
            + Vec2::new(
                cell_size * f32::from(pos.col()),
                cell_size * f32::from(pos.row()),
            );
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

        let letter = match cell.content {
            CellContent::Black => {
                painter.rect_filled(cell_rect, 0.0, palette.black_square);
                continue;
            }
            CellContent::Open(letter) => letter,
        };

        painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(palette));

        if vm.show_numbers
            && let Some(number) = cell.number
        {
            let inset = cell_size * 0.06;
            painter.text(
                cell_rect.min + Vec2::splat(inset),
                Align2::LEFT_TOP,
                number.to_string(),
                number_font.clone(),
                palette.text_number,
            );
        }

        if let Some(letter) = letter {
            painter.text(
                cell_rect.center() + Vec2::new(0.0, cell_size * 0.06),
                Align2::CENTER_CENTER,
                letter.as_str(),
                letter_font.clone(),
                palette.text_letter,
            );
        }

        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.cell_border(palette, cell_size),
            StrokeKind::Inside,
        );

        let response = ui.interact(
            cell_rect,
            ui.id().with((pos.row(), pos.col())),
            Sense::click(),
        );
        if response.clicked() {
            action_queue.request(SelectionAction::SelectCell(pos).into());
        }
    }
}
