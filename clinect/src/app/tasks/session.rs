//! Session resolution task.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;

/// Issue the one "who am I" request of the session lifecycle.
pub(crate) fn resolve_session(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.current_user().await;
        let _ = event_tx.send(AppEvent::SessionResolved(result)).await;
    });
}

/// Tear down the server session. Fire-and-forget: the local session is
/// already cleared by the caller; a failure here is logged, not retried.
pub(crate) fn logout(state: Arc<RwLock<AppState>>) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        if let Err(e) = api.logout().await {
            tracing::warn!(error = %e, "Server logout failed; local session already cleared");
        }
    });
}
