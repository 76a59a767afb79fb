//! # Chat Handlers
//!
//! Turn submission and the medical-history quick action. The `typing` flag
//! on [`ChatState`](crate::app::state::ChatState) acts as a turn lock: while
//! a request is outstanding, both entry points refuse re-entry.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ChatRequest;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;

/// Send one conversational turn. The user message is appended optimistically
/// before the request leaves; the assistant reply (or the canned apology)
/// arrives as a [`AppEvent::ChatResult`].
pub(crate) fn send_message(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    text: &str,
) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let request = {
        let mut guard = state.write();
        if guard.chat.typing {
            return;
        }
        let conversation_history = guard.chat.begin_turn(text);
        guard.chat.input.clear();
        ChatRequest {
            message: text.to_string(),
            conversation_history,
        }
    };

    tasks::chat::send_turn(state, event_tx, request);
}

/// "Use My Medical History" quick action: fetch the stored profile and, if
/// it has anything to say, send its summary as a regular turn. The typing
/// lock is held across the profile fetch so the user cannot interleave a
/// manual message.
pub(crate) fn use_medical_history(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    {
        let mut guard = state.write();
        if guard.chat.typing {
            return;
        }
        guard.chat.typing = true;
        guard.chat.error = None;
    }

    tasks::profile::load_history(state, event_tx, true);
}
