//! # Chat Bubbles
//!
//! Role-aligned message bubbles for the smart-match transcript. Assistant
//! messages may carry trial matches, rendered as clickable rows under the
//! text.

use egui;
use shared::{ChatMessage, ChatRole};

use crate::ui::theme::Theme;
use crate::ui::widgets::badges;

/// Render one transcript message. Returns the NCT ID of a clicked attached
/// trial, if any.
pub fn render_message(ui: &mut egui::Ui, message: &ChatMessage, theme: &Theme) -> Option<String> {
    let mut open_nct_id = None;
    let from_user = message.role == ChatRole::User;

    let layout = if from_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let fill = if from_user {
        egui::Color32::from_rgb(26, 58, 54)
    } else {
        theme.panel
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                ui.vertical(|ui| {
                    ui.label(&message.content);

                    if let Some(trials) = &message.trials {
                        if !trials.is_empty() {
                            ui.add_space(6.0);
                            ui.colored_label(theme.dim, "Matching trials:");
                            for trial in trials {
                                ui.horizontal(|ui| {
                                    if ui.link(&trial.title).clicked() {
                                        open_nct_id = Some(trial.nct_id.clone());
                                    }
                                    badges::render_status_badge(ui, &trial.status, theme);
                                    badges::render_score_badge(ui, trial.match_score, theme);
                                });
                            }
                        }
                    }
                });
            });
    });
    ui.add_space(6.0);

    open_nct_id
}

/// Animated "assistant is typing" dots, cycling on wall-clock time.
pub fn render_typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    let time = ui.ctx().input(|i| i.time);
    let dots = match ((time * 2.0) as usize) % 4 {
        0 => ".",
        1 => "..",
        2 => "...",
        _ => "",
    };
    ui.colored_label(theme.dim, format!("Assistant is typing{}", dots));
    ui.ctx().request_repaint();
}
