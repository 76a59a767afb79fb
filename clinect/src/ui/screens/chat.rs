//! # Smart Match Chat Screen
//!
//! Transcript with role-aligned bubbles, typing indicator, and the
//! "Use My Medical History" quick action. Enter sends; Shift+Enter inserts
//! a newline.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{chat, forms};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("Smart Match Assistant");
    ui.add_space(6.0);

    if let Some(error) = &state.chat.error {
        forms::render_error(ui, error, &theme);
    }

    let mut open = None;
    let input_height = 80.0;
    let transcript_height = (ui.available_height() - input_height).max(120.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(transcript_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &state.chat.messages {
                if let Some(nct_id) = chat::render_message(ui, message, &theme) {
                    open = Some(nct_id);
                }
            }
            if state.chat.typing {
                chat::render_typing_indicator(ui, &theme);
            }
        });

    if let Some(nct_id) = open {
        app.open_trial(nct_id);
        return;
    }

    ui.add_space(6.0);
    ui.separator();

    let mut send = false;
    let mut input = state.chat.input.clone();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::multiline(&mut input)
                .hint_text("Describe your conditions, location, or ask about trials...")
                .desired_rows(2)
                .desired_width(ui.available_width() - 220.0),
        );

        // Enter sends, Shift+Enter keeps the newline the edit just inserted.
        if response.has_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift)
        {
            send = true;
        }

        let idle = !state.chat.typing;
        if forms::render_button(ui, "Send", Some(theme.selected), idle).clicked() {
            send = true;
        }
        if forms::render_button(ui, "Use My Medical History", None, idle).clicked() {
            app.use_medical_history();
        }
    });

    if send && !state.chat.typing {
        let message = input.trim().to_string();
        app.state.write().chat.input.clear();
        if !message.is_empty() {
            app.send_chat_message(message);
        }
    } else {
        app.state.write().chat.input = input;
    }
}
