//! # Landing Screen
//!
//! Splash shown while the session resolves. Navigation away happens in the
//! session-resolution event handler, not here.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts;

pub fn render(ui: &mut egui::Ui, _state: &AppState, _app: &mut App) {
    let theme = Theme::default();

    layouts::render_centered(ui, |ui| {
        ui.label(
            egui::RichText::new("Clinect")
                .size(40.0)
                .strong()
                .color(theme.selected),
        );
        ui.add_space(8.0);
        ui.colored_label(theme.dim, "Find clinical trials that fit you");
        ui.add_space(24.0);
        ui.spinner();
    });
}
