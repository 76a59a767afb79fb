//! # Login Screen
//!
//! Single username field; the backend treats login as signup for unknown
//! names. Submit via button or Enter.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    layouts::render_centered(ui, |ui| {
        forms::render_form_heading(ui, "Sign In", &theme);

        let mut username_input = state.login.username_input.clone();
        let response = forms::render_text_input(
            ui,
            "Username",
            &mut username_input,
            "Enter any username",
            [260.0, 30.0],
        );
        let mut submit = forms::submitted(ui, &response);
        app.state.write().login.username_input = username_input;

        ui.add_space(12.0);

        if let Some(error) = &state.login.error {
            forms::render_error(ui, error, &theme);
        }

        let label = if state.login.submitting {
            "Signing in..."
        } else {
            "Sign In"
        };
        if forms::render_button(ui, label, Some(theme.selected), !state.login.submitting).clicked()
        {
            submit = true;
        }

        if submit && !state.login.submitting {
            app.handle_login_click();
        }

        ui.add_space(16.0);
        forms::render_hint(
            ui,
            "New here? Signing in with a fresh username creates your account.",
            &theme,
        );
    });
}
