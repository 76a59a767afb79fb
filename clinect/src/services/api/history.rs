//! # Medical History Endpoints
//!
//! Read/write the user's profile. Both pass-through.

use shared::{MedicalHistory, MedicalHistoryResponse};

use super::client::{read_json, ApiClient};

/// Read the stored medical history for the session user.
pub async fn get_medical_history(client: &ApiClient) -> Result<MedicalHistoryResponse, String> {
    let response = client
        .client
        .get(format!("{}/api/medical-history", ApiClient::base_url()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Overwrite the stored medical history wholesale.
#[tracing::instrument(skip(client, history))]
pub async fn save_medical_history(
    client: &ApiClient,
    history: MedicalHistory,
) -> Result<MedicalHistoryResponse, String> {
    tracing::debug!("Saving medical history");

    let response = client
        .client
        .post(format!("{}/api/medical-history", ApiClient::base_url()))
        .json(&history)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Medical history save network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<MedicalHistoryResponse, String> = read_json(response).await;

    if let Ok(ref body) = result {
        tracing::info!(success = body.success, "Medical history saved");
    }
    result
}
