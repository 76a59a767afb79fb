//! # Bookmark Handlers
//!
//! Save/unsave toggle on the detail screen and row removal on the saved
//! screen.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{SaveTrialRequest, SavedTrialData};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;

/// Toggle the bookmark on the detail screen. Direction is decided from the
/// current `saved` flag at click time; the toggle stays disabled until the
/// result event lands.
pub(crate) fn handle_save_toggle(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let action = {
        let mut guard = state.write();
        if guard.detail.save_pending {
            return;
        }
        let nct_id = match guard.detail.nct_id.clone() {
            Some(id) => id,
            None => return,
        };
        guard.detail.save_pending = true;
        if guard.detail.saved {
            Err(nct_id)
        } else {
            let trial_data = guard
                .detail
                .protocol
                .as_ref()
                .map(SavedTrialData::from_protocol)
                .unwrap_or_default();
            Ok(SaveTrialRequest { nct_id, trial_data })
        }
    };

    match action {
        Ok(request) => tasks::saved::save_trial(state, event_tx, request),
        Err(nct_id) => tasks::saved::unsave_from_detail(state, event_tx, nct_id),
    }
}

/// Remove a bookmark from its row on the saved screen.
pub(crate) fn handle_remove_saved(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nct_id: String,
) {
    tasks::saved::remove_saved(state, event_tx, nct_id);
}
