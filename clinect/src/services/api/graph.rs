//! # Graph Matching Endpoints
//!
//! Smart match, related trials, recommendations, and the condition taxonomy.
//! All must-succeed; their computation is entirely backend-side.

use shared::{
    ConditionHierarchyResponse, RecommendationsResponse, RelatedTrialsResponse, SmartMatchRequest,
    SmartMatchResponse,
};

use super::client::{require_success, ApiClient};

/// Graph-based matching from structured criteria.
#[tracing::instrument(skip(client, request), fields(conditions = ?request.conditions))]
pub async fn smart_match(
    client: &ApiClient,
    request: SmartMatchRequest,
) -> Result<SmartMatchResponse, String> {
    tracing::debug!("Running smart match");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/trials/smart-match", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Smart match network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<SmartMatchResponse, String> =
        require_success("Smart match failed", response).await;

    if let Ok(ref body) = result {
        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            matches = body.matches.len(),
            method = %body.method,
            "Smart match completed"
        );
    }
    result
}

/// Trials related to one NCT ID through shared graph relationships.
#[tracing::instrument(skip(client))]
pub async fn get_related_trials(
    client: &ApiClient,
    nct_id: &str,
    limit: usize,
) -> Result<RelatedTrialsResponse, String> {
    let response = client
        .client
        .get(format!("{}/api/trials/{}/related", ApiClient::base_url(), nct_id))
        .query(&[("limit", limit)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    require_success("Failed to fetch related trials", response).await
}

/// Personalized suggestions derived from the stored medical history.
#[tracing::instrument(skip(client))]
pub async fn get_recommendations(
    client: &ApiClient,
    limit: usize,
) -> Result<RecommendationsResponse, String> {
    let response = client
        .client
        .get(format!("{}/api/recommendations", ApiClient::base_url()))
        .query(&[("limit", limit)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    require_success("Failed to fetch recommendations", response).await
}

/// Parent/child taxonomy lookup for one condition.
#[tracing::instrument(skip(client))]
pub async fn get_condition_hierarchy(
    client: &ApiClient,
    condition: &str,
) -> Result<ConditionHierarchyResponse, String> {
    let response = client
        .client
        .get(format!("{}/api/conditions/hierarchy", ApiClient::base_url()))
        .query(&[("condition", condition)])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    require_success("Failed to fetch condition hierarchy", response).await
}
