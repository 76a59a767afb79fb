//! # Form Components
//!
//! Reusable form elements for consistent UI across screens.

use egui;

use crate::ui::theme::Theme;

/// Render a labelled single-line text input.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(label);
    ui.add_sized(size, egui::TextEdit::singleline(value).hint_text(hint))
}

/// Render a labelled multi-line text input.
pub fn render_text_area(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    )
}

/// Render a button, optionally filled with an accent color and disabled.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
    enabled: bool,
) -> egui::Response {
    let mut button = egui::Button::new(text);
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    ui.add_enabled(enabled, button)
}

/// Render a form heading in the accent color.
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(
        egui::RichText::new(text)
            .heading()
            .strong()
            .color(theme.selected),
    );
    ui.add_space(16.0);
}

/// Render an inline error message.
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.colored_label(theme.error, error);
    ui.add_space(8.0);
}

/// Render an inline success message.
pub fn render_success(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.colored_label(theme.success, message);
    ui.add_space(8.0);
}

/// Render dimmed hint text.
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.colored_label(theme.dim, hint);
}

/// Submit gesture for a single-line input: Enter pressed while the field
/// had focus.
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
