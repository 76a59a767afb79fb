//! # Authentication Handlers
//!
//! Login submit and logout.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation::validate_username;

/// Handle login submit. Input is trimmed; blank input is rejected inline
/// without a network call.
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let username = {
        let mut guard = state.write();
        if guard.login.submitting {
            return;
        }
        let username = guard.login.username_input.trim().to_string();
        let validation = validate_username(&username);
        if !validation.is_valid {
            guard.login.error = validation.error;
            return;
        }
        guard.login.submitting = true;
        guard.login.error = None;
        username
    };

    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.login(username).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle logout. Clears the in-memory identity and every per-screen state
/// immediately, navigates to login, and tears the server session down
/// fire-and-forget.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    {
        let mut guard = state.write();
        guard.session.clear();
        guard.login = Default::default();
        guard.search = Default::default();
        guard.detail = Default::default();
        guard.saved = Default::default();
        guard.profile = Default::default();
        guard.chat = Default::default();
        guard.current_screen = Screen::Login;
    }
    tracing::info!("Logged out; in-memory session cleared");
    tasks::session::logout(state);
}
