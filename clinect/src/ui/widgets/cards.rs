//! # Trial Cards
//!
//! Result cards and the compact rows used by the related-trials and
//! recommendations panels. Pure rendering; callers act on the returned
//! click state.

use egui;
use shared::{truncate_text, Recommendation, RelatedTrial, Study};

use crate::ui::theme::Theme;
use crate::ui::widgets::badges;

/// Render one search result card. Returns true when the card was clicked.
pub fn render_trial_card(ui: &mut egui::Ui, study: &Study, theme: &Theme) -> bool {
    let protocol = &study.protocol_section;
    let mut clicked = false;

    let response = egui::Frame::new()
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(protocol.title().unwrap_or("Untitled trial")).strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = protocol.overall_status() {
                        badges::render_status_badge(ui, status, theme);
                    }
                });
            });

            ui.horizontal(|ui| {
                if let Some(nct_id) = protocol.nct_id() {
                    ui.colored_label(theme.dim, nct_id);
                }
                ui.colored_label(theme.dim, badges::phase_text(protocol.phases()));
            });

            let conditions = protocol.conditions();
            if !conditions.is_empty() {
                ui.colored_label(theme.selected, conditions.join(", "));
            }

            if let Some(summary) = protocol.brief_summary() {
                ui.label(truncate_text(summary, 220));
            }
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        clicked = true;
    }
    clicked
}

/// Render one related-trial row. Returns true on click.
pub fn render_related_row(ui: &mut egui::Ui, trial: &RelatedTrial, theme: &Theme) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        if ui.link(&trial.title).clicked() {
            clicked = true;
        }
        badges::render_status_badge(ui, &trial.status, theme);
        if !trial.shared_conditions.is_empty() {
            ui.colored_label(
                theme.dim,
                format!("shares: {}", trial.shared_conditions.join(", ")),
            );
        }
    });
    clicked
}

/// Render one recommendation row. Returns true on click.
pub fn render_recommendation_row(
    ui: &mut egui::Ui,
    recommendation: &Recommendation,
    theme: &Theme,
) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        if ui.link(&recommendation.title).clicked() {
            clicked = true;
        }
        badges::render_status_badge(ui, &recommendation.status, theme);
        badges::render_score_badge(ui, recommendation.match_score, theme);
    });
    if !recommendation.matching_conditions.is_empty() {
        ui.colored_label(
            theme.dim,
            format!("matches: {}", recommendation.matching_conditions.join(", ")),
        );
    }
    clicked
}
