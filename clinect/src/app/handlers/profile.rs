//! # Profile Handlers
//!
//! Medical history form submission.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::MedicalHistory;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::core::error::AppError;
use crate::utils::validation::parse_age;

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate and persist the medical history form.
pub(crate) fn handle_profile_save(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let history = {
        let mut guard = state.write();
        if guard.profile.saving {
            return;
        }
        guard.profile.error = None;
        guard.profile.saved_message = None;

        let age = match parse_age(&guard.profile.age_input) {
            Ok(age) => age,
            Err(AppError::Validation(message)) => {
                guard.profile.error = Some(message);
                return;
            }
            Err(other) => {
                guard.profile.error = Some(other.to_string());
                return;
            }
        };

        guard.profile.saving = true;
        MedicalHistory {
            age,
            gender: non_blank(&guard.profile.gender),
            location: non_blank(&guard.profile.location),
            conditions: non_blank(&guard.profile.conditions),
            medications: non_blank(&guard.profile.medications),
        }
    };

    tasks::profile::save_history(state, event_tx, history);
}
