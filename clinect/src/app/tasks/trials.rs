//! Trial search, detail, and graph-panel tasks.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, PANEL_LIMIT};
use crate::services::api::SearchParams;
use crate::utils::runtime::TOKIO_RT;

/// Run a trial search. `append` routes the result to the page-append event
/// instead of replacing the list.
pub(crate) fn run_search(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    params: SearchParams,
    append: bool,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.search_trials(params).await;
        let event = if append {
            AppEvent::SearchPageResult(result)
        } else {
            AppEvent::SearchResult(result)
        };
        let _ = event_tx.send(event).await;
    });
}

/// Fetch one trial's protocol record.
pub(crate) fn fetch_details(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nct_id: String,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_trial_details(&nct_id).await;
        let _ = event_tx
            .send(AppEvent::TrialDetailsResult { nct_id, result })
            .await;
    });
}

/// Fetch the graph-based related-trials panel for the detail screen.
pub(crate) fn fetch_related(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    nct_id: String,
) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_related_trials(&nct_id, PANEL_LIMIT).await;
        let _ = event_tx
            .send(AppEvent::RelatedTrialsResult { nct_id, result })
            .await;
    });
}

/// Fetch the personalized recommendations panel for the search screen.
pub(crate) fn fetch_recommendations(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    TOKIO_RT.spawn(async move {
        let result = api.get_recommendations(PANEL_LIMIT).await;
        let _ = event_tx.send(AppEvent::RecommendationsResult(result)).await;
    });
}
