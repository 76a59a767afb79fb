//! # Trial Detail Screen
//!
//! One trial's full protocol record: overview, description, conditions,
//! interventions, eligibility, contacts and locations. Carries the
//! save/unsave toggle, the registry-page button, and the related-trials
//! panel.

use egui;
use shared::ProtocolSection;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{badges, cards, forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    if ui.button("← Back to search").clicked() {
        app.handle_screen_change(Screen::Search);
        return;
    }
    ui.add_space(6.0);

    if state.detail.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Loading trial...");
        });
        return;
    }

    if let Some(error) = &state.detail.error {
        forms::render_error(ui, error, &theme);
        return;
    }

    let Some(protocol) = &state.detail.protocol else {
        return;
    };

    let mut open_related = None;
    let mut toggle_save = false;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_header(ui, state, protocol, &mut toggle_save, &theme);
            ui.add_space(8.0);
            render_overview(ui, protocol, &theme);
            render_description(ui, protocol);
            render_conditions(ui, protocol, &theme);
            render_interventions(ui, protocol, &theme);
            render_eligibility(ui, protocol, &theme);
            render_contacts_locations(ui, protocol, &theme);

            if !state.detail.related.is_empty() {
                ui.add_space(8.0);
                layouts::render_panel(ui, Some("Related Trials"), |ui| {
                    for trial in &state.detail.related {
                        if cards::render_related_row(ui, trial, &theme) {
                            open_related = Some(trial.nct_id.clone());
                        }
                    }
                });
            }
        });

    if toggle_save {
        app.handle_save_toggle();
    }
    if let Some(nct_id) = open_related {
        app.open_trial(nct_id);
    }
}

fn render_header(
    ui: &mut egui::Ui,
    state: &AppState,
    protocol: &ProtocolSection,
    toggle_save: &mut bool,
    theme: &Theme,
) {
    ui.heading(protocol.title().unwrap_or("Untitled trial"));
    ui.horizontal(|ui| {
        if let Some(nct_id) = protocol.nct_id() {
            ui.colored_label(theme.dim, nct_id);
        }
        if let Some(status) = protocol.overall_status() {
            badges::render_status_badge(ui, status, theme);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.detail.save_pending {
                "Saving..."
            } else if state.detail.saved {
                "★ Saved"
            } else {
                "☆ Save Trial"
            };
            if forms::render_button(ui, label, None, !state.detail.save_pending).clicked() {
                *toggle_save = true;
            }

            if ui.button("View on registry").clicked() {
                if let Some(nct_id) = protocol.nct_id() {
                    let url = format!("https://clinicaltrials.gov/study/{}", nct_id);
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(error = %e, url = %url, "Failed to open registry page");
                    }
                }
            }
        });
    });
}

fn render_overview(ui: &mut egui::Ui, protocol: &ProtocolSection, theme: &Theme) {
    layouts::render_panel(ui, Some("Overview"), |ui| {
        egui::Grid::new("trial-overview").num_columns(2).show(ui, |ui| {
            if let Some(design) = &protocol.design_module {
                if let Some(study_type) = &design.study_type {
                    ui.colored_label(theme.dim, "Study type");
                    ui.label(study_type);
                    ui.end_row();
                }
                ui.colored_label(theme.dim, "Phases");
                ui.label(badges::phase_text(protocol.phases()));
                ui.end_row();
                if let Some(count) = design.enrollment_info.as_ref().and_then(|e| e.count) {
                    ui.colored_label(theme.dim, "Enrollment");
                    ui.label(format!("{} participants", count));
                    ui.end_row();
                }
            }
            if let Some(status) = &protocol.status_module {
                if let Some(date) = status.start_date_struct.as_ref().and_then(|d| d.date.as_deref()) {
                    ui.colored_label(theme.dim, "Start date");
                    ui.label(date);
                    ui.end_row();
                }
                if let Some(date) = status
                    .completion_date_struct
                    .as_ref()
                    .and_then(|d| d.date.as_deref())
                {
                    ui.colored_label(theme.dim, "Completion date");
                    ui.label(date);
                    ui.end_row();
                }
            }
            if let Some(org) = protocol
                .identification_module
                .as_ref()
                .and_then(|i| i.organization.as_ref())
                .and_then(|o| o.full_name.as_deref())
            {
                ui.colored_label(theme.dim, "Sponsor");
                ui.label(org);
                ui.end_row();
            }
        });
    });
}

fn render_description(ui: &mut egui::Ui, protocol: &ProtocolSection) {
    let Some(description) = &protocol.description_module else {
        return;
    };
    let text = description
        .detailed_description
        .as_deref()
        .or(description.brief_summary.as_deref());
    if let Some(text) = text {
        ui.add_space(6.0);
        layouts::render_panel(ui, Some("Description"), |ui| {
            ui.label(text);
        });
    }
}

fn render_conditions(ui: &mut egui::Ui, protocol: &ProtocolSection, theme: &Theme) {
    let conditions = protocol.conditions();
    if conditions.is_empty() {
        return;
    }
    ui.add_space(6.0);
    layouts::render_panel(ui, Some("Conditions"), |ui| {
        ui.colored_label(theme.selected, conditions.join(", "));
    });
}

fn render_interventions(ui: &mut egui::Ui, protocol: &ProtocolSection, theme: &Theme) {
    let interventions = protocol
        .arms_interventions_module
        .as_ref()
        .and_then(|m| m.interventions.as_deref())
        .unwrap_or_default();
    if interventions.is_empty() {
        return;
    }
    ui.add_space(6.0);
    layouts::render_panel(ui, Some("Interventions"), |ui| {
        for intervention in interventions {
            ui.horizontal(|ui| {
                if let Some(kind) = &intervention.intervention_type {
                    ui.colored_label(theme.dim, kind);
                }
                if let Some(name) = &intervention.name {
                    ui.label(name);
                }
            });
            if let Some(description) = &intervention.description {
                ui.colored_label(theme.dim, description);
            }
        }
    });
}

fn render_eligibility(ui: &mut egui::Ui, protocol: &ProtocolSection, theme: &Theme) {
    let Some(eligibility) = &protocol.eligibility_module else {
        return;
    };
    ui.add_space(6.0);
    layouts::render_panel(ui, Some("Eligibility"), |ui| {
        egui::Grid::new("trial-eligibility").num_columns(2).show(ui, |ui| {
            if let Some(sex) = &eligibility.sex {
                ui.colored_label(theme.dim, "Sex");
                ui.label(sex);
                ui.end_row();
            }
            let age_range = match (&eligibility.minimum_age, &eligibility.maximum_age) {
                (Some(min), Some(max)) => Some(format!("{} – {}", min, max)),
                (Some(min), None) => Some(format!("{} and older", min)),
                (None, Some(max)) => Some(format!("up to {}", max)),
                (None, None) => None,
            };
            if let Some(range) = age_range {
                ui.colored_label(theme.dim, "Age");
                ui.label(range);
                ui.end_row();
            }
            if let Some(healthy) = eligibility.healthy_volunteers {
                ui.colored_label(theme.dim, "Healthy volunteers");
                ui.label(if healthy { "Accepted" } else { "Not accepted" });
                ui.end_row();
            }
        });
        if let Some(criteria) = &eligibility.eligibility_criteria {
            ui.add_space(4.0);
            egui::CollapsingHeader::new("Full criteria")
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(criteria);
                });
        }
    });
}

fn render_contacts_locations(ui: &mut egui::Ui, protocol: &ProtocolSection, theme: &Theme) {
    let Some(module) = &protocol.contacts_locations_module else {
        return;
    };

    let contacts = module.central_contacts.as_deref().unwrap_or_default();
    if !contacts.is_empty() {
        ui.add_space(6.0);
        layouts::render_panel(ui, Some("Contacts"), |ui| {
            for contact in contacts {
                ui.horizontal(|ui| {
                    if let Some(name) = &contact.name {
                        ui.label(name);
                    }
                    if let Some(role) = &contact.role {
                        ui.colored_label(theme.dim, role);
                    }
                    if let Some(phone) = &contact.phone {
                        ui.colored_label(theme.dim, phone);
                    }
                    if let Some(email) = &contact.email {
                        ui.colored_label(theme.dim, email);
                    }
                });
            }
        });
    }

    let locations = module.locations.as_deref().unwrap_or_default();
    if !locations.is_empty() {
        ui.add_space(6.0);
        layouts::render_panel(ui, Some("Locations"), |ui| {
            for location in locations {
                let place = [
                    location.facility.as_deref(),
                    location.city.as_deref(),
                    location.state.as_deref(),
                    location.country.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
                ui.label(place);
            }
        });
    }
}
