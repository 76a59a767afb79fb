//! # Application Events
//!
//! Completion events sent from async API tasks back to the frame loop. Each
//! carries the typed result of one backend operation; the event handler
//! applies it to state.

use shared::{
    ChatResponse, CurrentUserResponse, LoginResponse, MedicalHistoryResponse,
    RecommendationsResponse, RelatedTrialsResponse, SaveTrialResponse, SavedTrial,
    TrialDetailsResponse, TrialsSearchResponse,
};

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// "Who am I" check completed (app start)
    SessionResolved(Result<CurrentUserResponse, String>),
    /// Login request completed
    LoginResult(Result<LoginResponse, String>),
    /// Trial search completed (replaces the result list)
    SearchResult(Result<TrialsSearchResponse, String>),
    /// Next search page fetched (appends to the result list)
    SearchPageResult(Result<TrialsSearchResponse, String>),
    /// Personalized recommendations fetched for the search screen
    RecommendationsResult(Result<RecommendationsResponse, String>),
    /// One trial's protocol record fetched
    TrialDetailsResult {
        nct_id: String,
        result: Result<TrialDetailsResponse, String>,
    },
    /// Saved-trials list fetched to resolve the detail screen's toggle state
    SavedCheckResult {
        nct_id: String,
        result: Result<Vec<SavedTrial>, String>,
    },
    /// Save or unsave toggled from the detail screen
    SaveToggleResult {
        nct_id: String,
        /// Target state the toggle was moving toward.
        saved: bool,
        result: Result<SaveTrialResponse, String>,
    },
    /// Related trials fetched for the detail screen
    RelatedTrialsResult {
        nct_id: String,
        result: Result<RelatedTrialsResponse, String>,
    },
    /// Saved-trials list fetched for the saved screen
    SavedListResult(Result<Vec<SavedTrial>, String>),
    /// Bookmark removed from the saved screen
    UnsaveResult {
        nct_id: String,
        result: Result<SaveTrialResponse, String>,
    },
    /// Medical history fetched for the profile form
    HistoryLoaded(Result<MedicalHistoryResponse, String>),
    /// Medical history saved from the profile form
    HistorySaved(Result<MedicalHistoryResponse, String>),
    /// Medical history fetched for the chat quick action
    HistoryForChat(Result<MedicalHistoryResponse, String>),
    /// Chat turn completed
    ChatResult(Result<ChatResponse, String>),
}
