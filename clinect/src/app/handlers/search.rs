//! # Search Handlers
//!
//! Search submit and pagination.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, SEARCH_PAGE_SIZE};
use crate::app::tasks;
use crate::services::api::SearchParams;

/// Submit the search form. Replaces the current result list.
pub(crate) fn handle_search_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let params = {
        let mut guard = state.write();
        if guard.search.loading {
            return;
        }
        guard.search.loading = true;
        guard.search.error = None;
        guard.search.next_page_token = None;
        SearchParams {
            condition: guard.search.condition_input.trim().to_string(),
            location: guard.search.location_input.trim().to_string(),
            status: guard.search.status,
            page_size: Some(SEARCH_PAGE_SIZE),
            page_token: None,
            use_cache: None,
        }
    };

    tasks::trials::run_search(state, event_tx, params, false);
}

/// "Load more": fetch the next page with the stored token and append.
pub(crate) fn handle_load_more(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let params = {
        let mut guard = state.write();
        if guard.search.loading || guard.search.loading_more {
            return;
        }
        let token = match guard.search.next_page_token.clone() {
            Some(token) => token,
            None => return,
        };
        guard.search.loading_more = true;
        SearchParams {
            condition: guard.search.condition_input.trim().to_string(),
            location: guard.search.location_input.trim().to_string(),
            status: guard.search.status,
            page_size: Some(SEARCH_PAGE_SIZE),
            page_token: Some(token),
            use_cache: None,
        }
    };

    tasks::trials::run_search(state, event_tx, params, true);
}
