//! # Profile Screen
//!
//! The medical-history form. Loaded on entry, saved wholesale.

use egui;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};

const GENDER_OPTIONS: [&str; 4] = ["", "female", "male", "other"];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.heading("Medical History");
    ui.colored_label(
        theme.dim,
        "Used for personalized recommendations and the chat assistant.",
    );
    ui.add_space(8.0);

    if state.profile.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Loading profile...");
        });
        return;
    }

    layouts::render_panel(ui, None, |ui| {
        ui.set_width(ui.available_width().min(480.0));

        let mut age_input = state.profile.age_input.clone();
        forms::render_text_input(ui, "Age", &mut age_input, "e.g. 34", [120.0, 26.0]);
        app.state.write().profile.age_input = age_input;
        ui.add_space(6.0);

        ui.label("Gender");
        let mut gender = state.profile.gender.clone();
        egui::ComboBox::from_id_salt("profile-gender")
            .selected_text(if gender.is_empty() { "—" } else { gender.as_str() })
            .show_ui(ui, |ui| {
                for option in GENDER_OPTIONS {
                    let label = if option.is_empty() { "—" } else { option };
                    ui.selectable_value(&mut gender, option.to_string(), label);
                }
            });
        if gender != state.profile.gender {
            app.state.write().profile.gender = gender;
        }
        ui.add_space(6.0);

        let mut location = state.profile.location.clone();
        forms::render_text_input(
            ui,
            "Location",
            &mut location,
            "City or region",
            [260.0, 26.0],
        );
        app.state.write().profile.location = location;
        ui.add_space(6.0);

        let mut conditions = state.profile.conditions.clone();
        forms::render_text_area(
            ui,
            "Conditions",
            &mut conditions,
            "e.g. asthma, hypertension",
            3,
        );
        app.state.write().profile.conditions = conditions;
        ui.add_space(6.0);

        let mut medications = state.profile.medications.clone();
        forms::render_text_area(ui, "Medications", &mut medications, "e.g. albuterol", 3);
        app.state.write().profile.medications = medications;
        ui.add_space(10.0);

        if let Some(error) = &state.profile.error {
            forms::render_error(ui, error, &theme);
        }
        if let Some(message) = &state.profile.saved_message {
            forms::render_success(ui, message, &theme);
        }

        let label = if state.profile.saving {
            "Saving..."
        } else {
            "Save Medical History"
        };
        if forms::render_button(ui, label, Some(theme.selected), !state.profile.saving).clicked() {
            app.handle_profile_save();
        }
    });
}
