pub(crate) mod celebration;
pub(crate) mod clue_list;
pub(crate) mod controls;
pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod keypad;
pub(crate) mod modal;
pub(crate) mod status_line;
