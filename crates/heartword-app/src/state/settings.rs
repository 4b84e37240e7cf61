#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplaySettings {
    pub(crate) highlight_selected_word: bool,
    pub(crate) show_clue_numbers: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            highlight_selected_word: true,
            show_clue_numbers: true,
        }
    }
}
