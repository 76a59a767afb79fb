//! # Saved Trials Screen
//!
//! The bookmark list, with per-row view and remove actions.

use egui;
use shared::format_timestamp;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("Saved Trials");
    ui.add_space(6.0);

    if let Some(error) = &state.saved.error {
        forms::render_error(ui, error, &theme);
    }

    if state.saved.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Loading saved trials...");
        });
        return;
    }

    if state.saved.trials.is_empty() {
        forms::render_hint(ui, "You haven't saved any trials yet.", &theme);
        if ui.link("Search for trials").clicked() {
            app.handle_screen_change(Screen::Search);
        }
        return;
    }

    let mut open = None;
    let mut remove = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for trial in &state.saved.trials {
                layouts::render_panel(ui, None, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(
                                trial.trial_data.title.as_deref().unwrap_or(&trial.nct_id),
                            )
                            .strong(),
                        );
                        if let Some(status) = &trial.trial_data.status {
                            badges::render_status_badge(ui, status, &theme);
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Remove").clicked() {
                                remove = Some(trial.nct_id.clone());
                            }
                            if ui.button("View").clicked() {
                                open = Some(trial.nct_id.clone());
                            }
                        });
                    });
                    if let Some(summary) = &trial.trial_data.summary {
                        ui.label(summary);
                    }
                    if let Some(saved_at) = &trial.saved_at {
                        ui.colored_label(
                            theme.dim,
                            format!("Saved {}", format_timestamp(saved_at)),
                        );
                    }
                });
                ui.add_space(6.0);
            }
        });

    if let Some(nct_id) = open {
        app.open_trial(nct_id);
    }
    if let Some(nct_id) = remove {
        app.handle_remove_saved(nct_id);
    }
}
