//! # Search Screen
//!
//! Condition/location/status filters, paged result cards, and the
//! personalized recommendations panel.

use egui;
use shared::RecruitmentStatus;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{cards, forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    render_filters(ui, state, app, &theme);
    ui.add_space(8.0);

    if !state.search.recommendations.is_empty() {
        render_recommendations(ui, state, app, &theme);
        ui.add_space(8.0);
    }

    render_results(ui, state, app, &theme);
}

fn render_filters(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    layouts::render_panel(ui, Some("Find a Trial"), |ui| {
        let mut submit = false;

        ui.horizontal(|ui| {
            let mut condition = state.search.condition_input.clone();
            let response = forms::render_text_input(
                ui,
                "Condition",
                &mut condition,
                "e.g. asthma",
                [180.0, 26.0],
            );
            submit |= forms::submitted(ui, &response);
            app.state.write().search.condition_input = condition;

            let mut location = state.search.location_input.clone();
            let response = forms::render_text_input(
                ui,
                "Location",
                &mut location,
                "e.g. Denver",
                [180.0, 26.0],
            );
            submit |= forms::submitted(ui, &response);
            app.state.write().search.location_input = location;

            ui.label("Status");
            let mut status = state.search.status;
            egui::ComboBox::from_id_salt("search-status")
                .selected_text(status.label())
                .show_ui(ui, |ui| {
                    for option in RecruitmentStatus::all() {
                        ui.selectable_value(&mut status, option, option.label());
                    }
                });
            if status != state.search.status {
                app.state.write().search.status = status;
            }

            let label = if state.search.loading {
                "Searching..."
            } else {
                "Search"
            };
            submit |= forms::render_button(
                ui,
                label,
                Some(theme.selected),
                !state.search.loading,
            )
            .clicked();
        });

        if submit && !state.search.loading {
            app.handle_search_submit();
        }
    });
}

fn render_recommendations(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    layouts::render_panel(ui, Some("Recommended for You"), |ui| {
        let mut open = None;
        for recommendation in &state.search.recommendations {
            if cards::render_recommendation_row(ui, recommendation, theme) {
                open = Some(recommendation.nct_id.clone());
            }
        }
        if let Some(nct_id) = open {
            app.open_trial(nct_id);
        }
    });
}

fn render_results(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    if let Some(error) = &state.search.error {
        forms::render_error(ui, error, theme);
    }

    if state.search.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Searching trials...");
        });
        return;
    }

    if state.search.studies.is_empty() {
        let hint = if state.search.searched {
            "No trials matched your filters. Try a broader condition or location."
        } else {
            "Enter a condition or location above to search the registry."
        };
        forms::render_hint(ui, hint, theme);
        return;
    }

    ui.horizontal(|ui| {
        if let Some(total) = state.search.total_count {
            ui.label(format!("{} trials found", total));
        }
        if state.search.cached {
            ui.colored_label(theme.dim, "(cached results)");
        }
    });
    ui.add_space(4.0);

    let mut open = None;
    let mut load_more = false;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for study in &state.search.studies {
                if cards::render_trial_card(ui, study, theme) {
                    if let Some(nct_id) = study.protocol_section.nct_id() {
                        open = Some(nct_id.to_string());
                    }
                }
                ui.add_space(6.0);
            }

            if state.search.next_page_token.is_some() {
                ui.vertical_centered(|ui| {
                    if state.search.loading_more {
                        ui.spinner();
                    } else if ui.button("Load more").clicked() {
                        load_more = true;
                    }
                });
            }
        });

    if let Some(nct_id) = open {
        app.open_trial(nct_id);
    }
    if load_more {
        app.handle_load_more();
    }
}
