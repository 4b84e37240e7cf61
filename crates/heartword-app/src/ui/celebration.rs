use eframe::egui::{Align2, Area, Context, Frame, Id, Order, RichText, Vec2};

use crate::ui::icon;

/// Draws the completion banner floating over the board.
pub(crate) fn show(ctx: &Context) {
    Area::new(Id::new("celebration"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).inner_margin(24.0).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let hearts = format!("{0} {1} {0}", icon::HEART, icon::PARTY);
                    ui.label(RichText::new(hearts).size(40.0));
                    ui.label(
                        RichText::new("You did it!")
                            .size(28.0)
                            .color(ui.visuals().warn_fg_color),
                    );
                    ui.label("Every word is filled in correctly.");
                });
            });
        });
}
