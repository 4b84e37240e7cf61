//! Glyphs available in egui's bundled emoji fonts.

pub(crate) const BACKSPACE: &str = "⬅";
pub(crate) const CANCEL: &str = "🗙";
pub(crate) const CHECK: &str = "✔";
pub(crate) const CROSS: &str = "✗";
pub(crate) const GEAR: &str = "⚙";
pub(crate) const HEART: &str = "❤";
pub(crate) const LIGHTBULB: &str = "💡";
pub(crate) const PALETTE: &str = "🎨";
pub(crate) const PARTY: &str = "🎉";
pub(crate) const PENCIL: &str = "✏";
pub(crate) const SWAP: &str = "⇄";
pub(crate) const TRASH: &str = "🗑";
