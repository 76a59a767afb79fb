//! # Conversational Smart-Match Endpoint
//!
//! Must-succeed: a non-2xx status is a hard failure the chat surface turns
//! into its canned apology turn.

use shared::{ChatRequest, ChatResponse};

use super::client::{require_success, ApiClient};

/// One conversational turn: the new message plus the prior history.
#[tracing::instrument(skip(client, request), fields(history_len = request.conversation_history.len()))]
pub async fn send_chat_message(
    client: &ApiClient,
    request: ChatRequest,
) -> Result<ChatResponse, String> {
    tracing::debug!("Sending chat message");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/chat", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<ChatResponse, String> =
        require_success("Failed to send chat message", response).await;

    if let Ok(ref body) = result {
        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            success = body.success,
            matches = body.trials.as_ref().map(Vec::len).unwrap_or(0),
            "Chat turn completed"
        );
    }
    result
}
