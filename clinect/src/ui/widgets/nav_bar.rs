//! # Navigation Bar
//!
//! Brand, one entry per protected screen, and a right-aligned logout button
//! showing the signed-in username. Only rendered for authenticated sessions.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the navigation bar. No-op when the session is anonymous.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    if !state.is_authenticated() {
        return;
    }

    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(32.0);

        ui.label(
            egui::RichText::new("Clinect")
                .strong()
                .color(theme.selected),
        );
        ui.add_space(12.0);

        for screen in Screen::nav_entries() {
            let active = state.current_screen == *screen;
            let label = if active {
                egui::RichText::new(screen.title())
                    .strong()
                    .color(theme.selected)
            } else {
                egui::RichText::new(screen.title())
            };
            if ui.selectable_label(active, label).clicked() && !active {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let username = state.session.username.as_deref().unwrap_or("");
            if ui.button(format!("Logout ({})", username)).clicked() {
                app.handle_logout_click();
            }
        });
    });
}
