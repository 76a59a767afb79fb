//! Medical-history tasks.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::MedicalHistory;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;

/// Load the stored profile. `for_chat` routes the result to the chat quick
/// action instead of the profile form.
pub(crate) fn load_history(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    for_chat: bool,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_medical_history().await;
        let event = if for_chat {
            AppEvent::HistoryForChat(result)
        } else {
            AppEvent::HistoryLoaded(result)
        };
        let _ = event_tx.send(event).await;
    });
}

/// Overwrite the stored profile wholesale.
pub(crate) fn save_history(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    history: MedicalHistory,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.save_medical_history(history).await;
        let _ = event_tx.send(AppEvent::HistorySaved(result)).await;
    });
}
