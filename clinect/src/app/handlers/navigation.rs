//! # Navigation Handlers
//!
//! Screen changes with the deny-by-default auth gate, plus the per-screen
//! on-entry fetches.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DetailState, Screen};
use crate::app::tasks;

/// Handle a screen change. Protected screens redirect to login for an
/// unauthenticated session; entering a screen triggers its initial loads.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let entered = {
        let mut guard = state.write();
        if screen.requires_auth() && !guard.is_authenticated() {
            tracing::info!(screen = screen.title(), "Access denied; redirecting to login");
            guard.current_screen = Screen::Login;
            return;
        }
        guard.current_screen = screen;
        screen
    };

    trigger_entry_loads(state, event_tx, entered);
}

/// Open the detail screen for one trial, resetting any previous record.
pub(crate) fn open_trial(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nct_id: String,
) {
    {
        let mut guard = state.write();
        if !guard.is_authenticated() {
            guard.current_screen = Screen::Login;
            return;
        }
        guard.detail = DetailState::open(nct_id.clone());
        guard.current_screen = Screen::TrialDetail;
    }

    tasks::trials::fetch_details(state.clone(), event_tx.clone(), nct_id.clone());
    tasks::saved::check_saved(state.clone(), event_tx.clone(), nct_id.clone());
    tasks::trials::fetch_related(state, event_tx, nct_id);
}

/// Kick off the fetches a screen needs on entry. Each runs once per entry;
/// the flags reset on logout.
fn trigger_entry_loads(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    match screen {
        Screen::Search => {
            let should_fetch = {
                let mut guard = state.write();
                if guard.search.recommendations_loaded {
                    false
                } else {
                    guard.search.recommendations_loaded = true;
                    true
                }
            };
            if should_fetch {
                tasks::trials::fetch_recommendations(state, event_tx);
            }
        }
        Screen::Saved => {
            let should_fetch = {
                let mut guard = state.write();
                if guard.saved.loaded {
                    false
                } else {
                    guard.saved.loaded = true;
                    guard.saved.loading = true;
                    true
                }
            };
            if should_fetch {
                tasks::saved::fetch_saved_list(state, event_tx);
            }
        }
        Screen::Profile => {
            let should_fetch = {
                let mut guard = state.write();
                if guard.profile.loaded {
                    false
                } else {
                    guard.profile.loaded = true;
                    guard.profile.loading = true;
                    true
                }
            };
            if should_fetch {
                tasks::profile::load_history(state, event_tx, false);
            }
        }
        _ => {}
    }
}
