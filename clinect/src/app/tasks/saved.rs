//! Bookmark tasks.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::SaveTrialRequest;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;

/// Fetch the bookmark list for the saved screen.
pub(crate) fn fetch_saved_list(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_saved_trials().await;
        let _ = event_tx.send(AppEvent::SavedListResult(result)).await;
    });
}

/// Resolve the detail screen's save-toggle state by listing bookmarks and
/// checking membership.
pub(crate) fn check_saved(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, nct_id: String) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_saved_trials().await;
        let _ = event_tx
            .send(AppEvent::SavedCheckResult { nct_id, result })
            .await;
    });
}

/// Create a bookmark from the detail screen's toggle.
pub(crate) fn save_trial(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: SaveTrialRequest,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let nct_id = request.nct_id.clone();
        let result = api.save_trial(request).await;
        let _ = event_tx
            .send(AppEvent::SaveToggleResult {
                nct_id,
                saved: true,
                result,
            })
            .await;
    });
}

/// Remove a bookmark from the detail screen's toggle.
pub(crate) fn unsave_from_detail(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nct_id: String,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.unsave_trial(&nct_id).await;
        let _ = event_tx
            .send(AppEvent::SaveToggleResult {
                nct_id,
                saved: false,
                result,
            })
            .await;
    });
}

/// Remove a bookmark from the saved screen's row action.
pub(crate) fn remove_saved(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, nct_id: String) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.unsave_trial(&nct_id).await;
        let _ = event_tx.send(AppEvent::UnsaveResult { nct_id, result }).await;
    });
}
