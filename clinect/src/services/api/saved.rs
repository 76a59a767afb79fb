//! # Bookmark Endpoints
//!
//! Listing is must-succeed; saving and removing are pass-through, with the
//! outcome carried in the body's `success`/`error` fields.

use shared::{SaveTrialRequest, SaveTrialResponse, SavedTrial};

use super::client::{read_json, require_success, ApiClient};

/// List the user's bookmarks.
#[tracing::instrument(skip(client))]
pub async fn get_saved_trials(client: &ApiClient) -> Result<Vec<SavedTrial>, String> {
    let response = client
        .client
        .get(format!("{}/api/saved-trials", ApiClient::base_url()))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Saved trials network error");
            format!("Network error: {}", e)
        })?;

    require_success("Failed to fetch saved trials", response).await
}

/// Bookmark a trial with its denormalized display snapshot.
#[tracing::instrument(skip(client, request), fields(nct_id = %request.nct_id))]
pub async fn save_trial(
    client: &ApiClient,
    request: SaveTrialRequest,
) -> Result<SaveTrialResponse, String> {
    tracing::debug!("Saving trial");

    let response = client
        .client
        .post(format!("{}/api/saved-trials", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Save trial network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<SaveTrialResponse, String> = read_json(response).await;

    if let Ok(ref body) = result {
        tracing::info!(success = body.success, "Save trial response received");
    }
    result
}

/// Remove a bookmark.
#[tracing::instrument(skip(client))]
pub async fn unsave_trial(client: &ApiClient, nct_id: &str) -> Result<SaveTrialResponse, String> {
    let response = client
        .client
        .delete(format!("{}/api/saved-trials/{}", ApiClient::base_url(), nct_id))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Unsave trial network error");
            format!("Network error: {}", e)
        })?;

    read_json(response).await
}
