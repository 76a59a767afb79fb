//! # Event Handler
//!
//! Applies async task results to application state. One method per event;
//! each takes a short write lock, never across an await point.

use shared::{
    ChatMessage, ChatResponse, CurrentUserResponse, LoginResponse, MedicalHistoryResponse,
    RecommendationsResponse, RelatedTrialsResponse, SaveTrialResponse, SavedTrial,
    TrialDetailsResponse, TrialsSearchResponse,
};

use crate::app::state::{Screen, CHAT_APOLOGY};
use crate::app::{App, AppEvent};

/// Trait for the event handling implementation.
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionResolved(result) => self.handle_session_resolved(result),
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SearchResult(result) => self.handle_search_result(result, false),
            AppEvent::SearchPageResult(result) => self.handle_search_result(result, true),
            AppEvent::RecommendationsResult(result) => self.handle_recommendations_result(result),
            AppEvent::TrialDetailsResult { nct_id, result } => {
                self.handle_trial_details_result(nct_id, result)
            }
            AppEvent::SavedCheckResult { nct_id, result } => {
                self.handle_saved_check_result(nct_id, result)
            }
            AppEvent::SaveToggleResult {
                nct_id,
                saved,
                result,
            } => self.handle_save_toggle_result(nct_id, saved, result),
            AppEvent::RelatedTrialsResult { nct_id, result } => {
                self.handle_related_trials_result(nct_id, result)
            }
            AppEvent::SavedListResult(result) => self.handle_saved_list_result(result),
            AppEvent::UnsaveResult { nct_id, result } => self.handle_unsave_result(nct_id, result),
            AppEvent::HistoryLoaded(result) => self.handle_history_loaded(result),
            AppEvent::HistorySaved(result) => self.handle_history_saved(result),
            AppEvent::HistoryForChat(result) => self.handle_history_for_chat(result),
            AppEvent::ChatResult(result) => self.handle_chat_result(result),
        }
    }
}

impl App {
    /// Resolve the session state machine. Any failure is "not logged in";
    /// the user never sees an error from this path.
    fn handle_session_resolved(&mut self, result: Result<CurrentUserResponse, String>) {
        let mut state = self.state.write();
        match result {
            Ok(body) if body.logged_in => {
                let username = body.username.unwrap_or_default();
                tracing::info!(username = %username, "Session resolved: authenticated");
                state.session.authenticate(username);
                if state.current_screen == Screen::Landing {
                    state.current_screen = Screen::Search;
                }
            }
            other => {
                if let Err(e) = other {
                    tracing::debug!(error = %e, "Session resolution failed; treating as anonymous");
                }
                state.session.clear();
                if state.current_screen.requires_auth() || state.current_screen == Screen::Landing {
                    state.current_screen = Screen::Login;
                }
            }
        }
    }

    fn handle_login_result(&mut self, result: Result<LoginResponse, String>) {
        let mut state = self.state.write();
        state.login.submitting = false;
        match result {
            Ok(body) if body.success => {
                let username = body.username.unwrap_or_default();
                tracing::info!(username = %username, "Login succeeded");
                state.session.authenticate(username);
                state.login = Default::default();
                state.current_screen = Screen::Search;
            }
            Ok(body) => {
                state.login.error = Some(body.error.unwrap_or_else(|| "Login failed".to_string()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login transport failure");
                state.login.error = Some("Failed to connect to server".to_string());
            }
        }
    }

    /// Apply a search response. `append` distinguishes a "Load more" page
    /// from a fresh search.
    fn handle_search_result(&mut self, result: Result<TrialsSearchResponse, String>, append: bool) {
        let mut state = self.state.write();
        state.search.loading = false;
        state.search.loading_more = false;
        state.search.searched = true;
        match result {
            Ok(body) => {
                if let Some(error) = body.error {
                    state.search.error = Some(error);
                    return;
                }
                let studies = body.studies.unwrap_or_default();
                if append {
                    state.search.studies.extend(studies);
                } else {
                    state.search.studies = studies;
                }
                state.search.total_count = body.total_count;
                state.search.next_page_token = body.next_page_token;
                state.search.cached = body.cached.unwrap_or(false);
                state.search.error = None;
            }
            Err(e) => {
                state.search.error = Some(e);
            }
        }
    }

    /// Recommendations are best-effort: failures hide the panel, nothing
    /// more.
    fn handle_recommendations_result(&mut self, result: Result<RecommendationsResponse, String>) {
        let mut state = self.state.write();
        match result {
            Ok(body) if body.success => {
                state.search.recommendations = body.recommendations;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "Recommendations unavailable");
            }
        }
    }

    fn handle_trial_details_result(
        &mut self,
        nct_id: String,
        result: Result<TrialDetailsResponse, String>,
    ) {
        let mut state = self.state.write();
        // The user may have navigated to a different trial mid-request.
        if state.detail.nct_id.as_deref() != Some(nct_id.as_str()) {
            return;
        }
        state.detail.loading = false;
        match result {
            Ok(body) => {
                if let Some(error) = body.error {
                    state.detail.error = Some(error);
                } else if let Some(protocol) = body.protocol_section {
                    state.detail.protocol = Some(protocol);
                    state.detail.error = None;
                } else {
                    state.detail.error = Some("Trial not found".to_string());
                }
            }
            Err(e) => {
                state.detail.error = Some(e);
            }
        }
    }

    fn handle_saved_check_result(&mut self, nct_id: String, result: Result<Vec<SavedTrial>, String>) {
        let mut state = self.state.write();
        if state.detail.nct_id.as_deref() != Some(nct_id.as_str()) {
            return;
        }
        match result {
            Ok(saved) => {
                state.detail.saved = saved.iter().any(|t| t.nct_id == nct_id);
            }
            Err(e) => {
                // The toggle stays in its unsaved default; saving again is
                // idempotent on the backend.
                tracing::warn!(error = %e, nct_id = %nct_id, "Saved-state check failed");
            }
        }
    }

    fn handle_save_toggle_result(
        &mut self,
        nct_id: String,
        saved: bool,
        result: Result<SaveTrialResponse, String>,
    ) {
        let mut state = self.state.write();
        if state.detail.nct_id.as_deref() == Some(nct_id.as_str()) {
            state.detail.save_pending = false;
        }
        match result {
            Ok(body) if body.success => {
                if state.detail.nct_id.as_deref() == Some(nct_id.as_str()) {
                    state.detail.saved = saved;
                }
                // Unsave prunes the list in place. A save happens away from
                // the saved screen, so invalidate the once-per-entry gate
                // and let the next visit refetch.
                if saved {
                    state.saved.loaded = false;
                } else {
                    state.saved.trials.retain(|t| t.nct_id != nct_id);
                }
                let verb = if saved { "saved" } else { "removed" };
                state
                    .pending_notifications
                    .push(("success".to_string(), format!("Trial {}", verb)));
            }
            Ok(body) => {
                let message = body
                    .error
                    .unwrap_or_else(|| "Failed to update saved trials".to_string());
                state.pending_notifications.push(("error".to_string(), message));
            }
            Err(e) => {
                state.pending_notifications.push(("error".to_string(), e));
            }
        }
    }

    fn handle_related_trials_result(
        &mut self,
        nct_id: String,
        result: Result<RelatedTrialsResponse, String>,
    ) {
        let mut state = self.state.write();
        if state.detail.nct_id.as_deref() != Some(nct_id.as_str()) {
            return;
        }
        match result {
            Ok(body) if body.success => {
                state.detail.related = body.related_trials;
            }
            Ok(_) => {}
            Err(e) => {
                // Best-effort panel; absence is acceptable.
                tracing::debug!(error = %e, nct_id = %nct_id, "Related trials unavailable");
            }
        }
    }

    fn handle_saved_list_result(&mut self, result: Result<Vec<SavedTrial>, String>) {
        let mut state = self.state.write();
        state.saved.loading = false;
        match result {
            Ok(trials) => {
                state.saved.trials = trials;
                state.saved.error = None;
            }
            Err(e) => {
                state.saved.error = Some(e);
            }
        }
    }

    fn handle_unsave_result(&mut self, nct_id: String, result: Result<SaveTrialResponse, String>) {
        let mut state = self.state.write();
        match result {
            Ok(body) if body.success => {
                state.saved.trials.retain(|t| t.nct_id != nct_id);
                if state.detail.nct_id.as_deref() == Some(nct_id.as_str()) {
                    state.detail.saved = false;
                }
            }
            Ok(body) => {
                let message = body
                    .error
                    .unwrap_or_else(|| "Failed to remove trial".to_string());
                state.pending_notifications.push(("error".to_string(), message));
            }
            Err(e) => {
                state.pending_notifications.push(("error".to_string(), e));
            }
        }
    }

    fn handle_history_loaded(&mut self, result: Result<MedicalHistoryResponse, String>) {
        let mut state = self.state.write();
        state.profile.loading = false;
        match result {
            Ok(body) => {
                if let Some(history) = body.data {
                    state.profile.fill_from(&history);
                    state.profile.error = None;
                } else if let Some(error) = body.error {
                    state.profile.error = Some(error);
                }
                // A missing profile is a blank form, not an error.
            }
            Err(e) => {
                state.profile.error = Some(e);
            }
        }
    }

    fn handle_history_saved(&mut self, result: Result<MedicalHistoryResponse, String>) {
        let mut state = self.state.write();
        state.profile.saving = false;
        match result {
            Ok(body) if body.success => {
                state.profile.error = None;
                state.profile.saved_message =
                    Some("Medical history saved successfully!".to_string());
            }
            Ok(body) => {
                state.profile.saved_message = None;
                state.profile.error = Some(
                    body.error
                        .unwrap_or_else(|| "Failed to save medical history".to_string()),
                );
            }
            Err(e) => {
                state.profile.saved_message = None;
                state.profile.error = Some(e);
            }
        }
    }

    /// "Use My Medical History" quick action: the profile arrived, compose
    /// the first-person summary and send it through the normal chat path.
    fn handle_history_for_chat(&mut self, result: Result<MedicalHistoryResponse, String>) {
        let summary = match result {
            Ok(body) => body.data.as_ref().and_then(|h| h.summary_message()),
            Err(e) => {
                let mut state = self.state.write();
                state.chat.typing = false;
                state.chat.error = Some(e);
                return;
            }
        };

        match summary {
            Some(message) => {
                // Release the quick-action lock; the send path takes it
                // again with the message in place.
                {
                    let mut state = self.state.write();
                    state.chat.typing = false;
                }
                self.send_chat_message(message);
            }
            None => {
                let mut state = self.state.write();
                state.chat.typing = false;
                state.chat.error = Some(
                    "No medical history found. Fill in your profile first.".to_string(),
                );
            }
        }
    }

    fn handle_chat_result(&mut self, result: Result<ChatResponse, String>) {
        let mut state = self.state.write();
        match result {
            Ok(body) if body.success => {
                let mut message = ChatMessage::assistant(body.assistant_message);
                message.trials = body.trials;
                state.chat.complete_turn(message, None);
            }
            Ok(body) => {
                let error = body.error.unwrap_or_else(|| "Chat request failed".to_string());
                state
                    .chat
                    .complete_turn(ChatMessage::assistant(CHAT_APOLOGY), Some(error));
            }
            Err(e) => {
                state
                    .chat
                    .complete_turn(ChatMessage::assistant(CHAT_APOLOGY), Some(e));
            }
        }
    }
}
