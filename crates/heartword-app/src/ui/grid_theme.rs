use eframe::egui::{Color32, Visuals};

/// Color palette for crossword grid rendering.
///
/// Kept apart from `egui::Visuals` so the grid can use its own accent colors
/// for selection, the active word, and the solved state.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_selected: Color32,
    pub(crate) cell_bg_selected_word: Color32,
    pub(crate) cell_bg_solved: Color32,
    pub(crate) black_square: Color32,

    pub(crate) border_inactive: Color32,
    pub(crate) border_selected: Color32,

    pub(crate) text_letter: Color32,
    pub(crate) text_number: Color32,
}

impl GridPalette {
    fn light(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: Color32::WHITE,
            cell_bg_selected: Color32::from_rgb(0xf4, 0x8f, 0xb1),
            cell_bg_selected_word: Color32::from_rgb(0xfc, 0xe4, 0xec),
            cell_bg_solved: Color32::from_rgb(0xe8, 0xf5, 0xe9),
            black_square: Color32::from_rgb(0x2b, 0x1d, 0x2a),

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: Color32::from_rgb(0xc2, 0x18, 0x5b),

            text_letter: visuals.strong_text_color(),
            text_number: visuals.weak_text_color(),
        }
    }

    fn dark(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected: Color32::from_rgb(0xad, 0x14, 0x57),
            cell_bg_selected_word: Color32::from_rgb(0x4a, 0x1c, 0x33),
            cell_bg_solved: Color32::from_rgb(0x1b, 0x3d, 0x24),
            black_square: Color32::from_rgb(0x0b, 0x07, 0x0b),

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: Color32::from_rgb(0xf4, 0x8f, 0xb1),

            text_letter: visuals.strong_text_color(),
            text_number: visuals.weak_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct GridTheme {
    light: GridPalette,
    dark: GridPalette,
}

impl GridTheme {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::light(visuals),
            dark: GridPalette::dark(visuals),
        }
    }

    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
