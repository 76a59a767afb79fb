//! # Session Endpoints
//!
//! Login, logout, and current-user resolution. All three are pass-through:
//! the body is decoded even on non-2xx and the caller interprets it.

use shared::{CurrentUserResponse, LoginRequest, LoginResponse, LogoutResponse};

use super::client::{read_json, ApiClient};

/// Establish a session for a username. Mock authentication: the backend
/// creates the account on first use and answers with a session cookie.
#[tracing::instrument(skip(client), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String) -> Result<LoginResponse, String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username };

    let response = client
        .client
        .post(format!("{}/api/login", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let result: Result<LoginResponse, String> = read_json(response).await;

    if let Ok(ref body) = result {
        tracing::info!(
            status = status.as_u16(),
            success = body.success,
            duration_ms = start.elapsed().as_millis(),
            "Login response received"
        );
    }
    result
}

/// Tear down the server session. Callers treat this as fire-and-forget.
pub async fn logout(client: &ApiClient) -> Result<LogoutResponse, String> {
    let response = client
        .client
        .post(format!("{}/api/logout", ApiClient::base_url()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Resolve the current session from the cookie. A failure here is treated by
/// the caller as "not logged in", so this only logs at debug level.
#[tracing::instrument(skip(client))]
pub async fn current_user(client: &ApiClient) -> Result<CurrentUserResponse, String> {
    tracing::debug!("Resolving session");

    let response = client
        .client
        .get(format!("{}/api/current-user", ApiClient::base_url()))
        .send()
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "Session resolution network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<CurrentUserResponse, String> = read_json(response).await;

    if let Ok(ref body) = result {
        tracing::debug!(logged_in = body.logged_in, "Session resolved");
    }
    result
}
