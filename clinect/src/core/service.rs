//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    ChatRequest, ChatResponse, ConditionHierarchyResponse, CurrentUserResponse, LoginResponse,
    LogoutResponse, MedicalHistory, MedicalHistoryResponse, RecommendationsResponse,
    RelatedTrialsResponse, SaveTrialRequest, SaveTrialResponse, SavedTrial, SmartMatchRequest,
    SmartMatchResponse, TrialDetailsResponse, TrialsSearchResponse,
};

use crate::services::api::SearchParams;

/// Trait covering every backend operation.
///
/// The app holds an `Arc<dyn ApiService>` so handlers and tasks never depend
/// on the concrete HTTP client; tests substitute a mock implementation.
///
/// All methods return `Result<T, String>` with user-renderable messages. The
/// per-endpoint hard-failure policy (pass-through vs must-succeed) is part of
/// each operation's contract; see `services::api` for the table.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Establish a session for a username (mock auth; any username works).
    async fn login(&self, username: String) -> Result<LoginResponse, String>;

    /// Tear down the server session.
    async fn logout(&self) -> Result<LogoutResponse, String>;

    /// Resolve the current session from the cookie.
    async fn current_user(&self) -> Result<CurrentUserResponse, String>;

    /// Read the stored medical history profile.
    async fn get_medical_history(&self) -> Result<MedicalHistoryResponse, String>;

    /// Overwrite the stored medical history profile.
    async fn save_medical_history(
        &self,
        history: MedicalHistory,
    ) -> Result<MedicalHistoryResponse, String>;

    /// Search trials by condition/location/status with pagination.
    async fn search_trials(&self, params: SearchParams) -> Result<TrialsSearchResponse, String>;

    /// Fetch one trial's full protocol record.
    async fn get_trial_details(&self, nct_id: &str) -> Result<TrialDetailsResponse, String>;

    /// List the user's bookmarks.
    async fn get_saved_trials(&self) -> Result<Vec<SavedTrial>, String>;

    /// Bookmark a trial.
    async fn save_trial(&self, request: SaveTrialRequest) -> Result<SaveTrialResponse, String>;

    /// Remove a bookmark.
    async fn unsave_trial(&self, nct_id: &str) -> Result<SaveTrialResponse, String>;

    /// One conversational turn, given the message and prior history.
    async fn send_chat_message(&self, request: ChatRequest) -> Result<ChatResponse, String>;

    /// Graph-based matching from structured criteria.
    async fn smart_match(&self, request: SmartMatchRequest) -> Result<SmartMatchResponse, String>;

    /// Trials related to one NCT ID through graph relationships.
    async fn get_related_trials(
        &self,
        nct_id: &str,
        limit: usize,
    ) -> Result<RelatedTrialsResponse, String>;

    /// Personalized suggestions derived from the stored history.
    async fn get_recommendations(&self, limit: usize) -> Result<RecommendationsResponse, String>;

    /// Parent/child taxonomy lookup for one condition.
    async fn get_condition_hierarchy(
        &self,
        condition: &str,
    ) -> Result<ConditionHierarchyResponse, String>;
}
