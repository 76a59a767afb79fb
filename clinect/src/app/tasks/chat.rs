//! Chat turn task.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ChatRequest;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;

/// Issue one conversational turn. The caller has already appended the user
/// message and taken the typing lock.
pub(crate) fn send_turn(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: ChatRequest,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.send_chat_message(request).await;
        let _ = event_tx.send(AppEvent::ChatResult(result)).await;
    });
}
