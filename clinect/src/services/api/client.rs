//! # API Client
//!
//! Main HTTP client for backend API communication.

use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::core::service::ApiService;

static API_BASE_URL: Lazy<String> = Lazy::new(|| Settings::from_env().api_url);

/// HTTP client for communicating with the trials backend.
///
/// Holds one `reqwest::Client` with a persistent cookie store; the backend's
/// session cookie set by `/api/login` rides on every subsequent request.
/// The connection pool makes the client cheap to share behind an `Arc`.
pub struct ApiClient {
    pub(crate) client: Client,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// The cookie store carries the session credential. No timeout is set:
    /// every operation is a single attempt with no time budget.
    pub fn new() -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Base URL for API requests, read from `CLINECT_API_URL` once.
    pub(crate) fn base_url() -> &'static str {
        API_BASE_URL.as_str()
    }
}

/// Pass-through policy: decode the body no matter the HTTP status. The
/// caller branches on the payload's embedded `success`/`error` fields.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        format!("Failed to parse response: {}", e)
    })
}

/// Must-succeed policy: a non-2xx status is an error carrying `what` as the
/// user-renderable message; only then is the body decoded.
pub(crate) async fn require_success<T: DeserializeOwned>(
    what: &str,
    response: Response,
) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), what, "API call failed");
        return Err(format!("{}: {}", what, status));
    }
    read_json(response).await
}

// Implement ApiService for the concrete client by delegating to the
// per-endpoint module functions.
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: String) -> Result<shared::LoginResponse, String> {
        crate::services::api::auth::login(self, username).await
    }

    async fn logout(&self) -> Result<shared::LogoutResponse, String> {
        crate::services::api::auth::logout(self).await
    }

    async fn current_user(&self) -> Result<shared::CurrentUserResponse, String> {
        crate::services::api::auth::current_user(self).await
    }

    async fn get_medical_history(&self) -> Result<shared::MedicalHistoryResponse, String> {
        crate::services::api::history::get_medical_history(self).await
    }

    async fn save_medical_history(
        &self,
        history: shared::MedicalHistory,
    ) -> Result<shared::MedicalHistoryResponse, String> {
        crate::services::api::history::save_medical_history(self, history).await
    }

    async fn search_trials(
        &self,
        params: super::trials::SearchParams,
    ) -> Result<shared::TrialsSearchResponse, String> {
        crate::services::api::trials::search_trials(self, params).await
    }

    async fn get_trial_details(&self, nct_id: &str) -> Result<shared::TrialDetailsResponse, String> {
        crate::services::api::trials::get_trial_details(self, nct_id).await
    }

    async fn get_saved_trials(&self) -> Result<Vec<shared::SavedTrial>, String> {
        crate::services::api::saved::get_saved_trials(self).await
    }

    async fn save_trial(
        &self,
        request: shared::SaveTrialRequest,
    ) -> Result<shared::SaveTrialResponse, String> {
        crate::services::api::saved::save_trial(self, request).await
    }

    async fn unsave_trial(&self, nct_id: &str) -> Result<shared::SaveTrialResponse, String> {
        crate::services::api::saved::unsave_trial(self, nct_id).await
    }

    async fn send_chat_message(
        &self,
        request: shared::ChatRequest,
    ) -> Result<shared::ChatResponse, String> {
        crate::services::api::chat::send_chat_message(self, request).await
    }

    async fn smart_match(
        &self,
        request: shared::SmartMatchRequest,
    ) -> Result<shared::SmartMatchResponse, String> {
        crate::services::api::graph::smart_match(self, request).await
    }

    async fn get_related_trials(
        &self,
        nct_id: &str,
        limit: usize,
    ) -> Result<shared::RelatedTrialsResponse, String> {
        crate::services::api::graph::get_related_trials(self, nct_id, limit).await
    }

    async fn get_recommendations(
        &self,
        limit: usize,
    ) -> Result<shared::RecommendationsResponse, String> {
        crate::services::api::graph::get_recommendations(self, limit).await
    }

    async fn get_condition_hierarchy(
        &self,
        condition: &str,
    ) -> Result<shared::ConditionHierarchyResponse, String> {
        crate::services::api::graph::get_condition_hierarchy(self, condition).await
    }
}
