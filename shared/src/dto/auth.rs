use serde::{Deserialize, Serialize};

/// Login request. The backend uses mock authentication: posting any username
/// establishes (or reuses) an account and sets the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
}

/// Login response. `success == false` carries the failure text in `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Logout response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
}

/// Session resolution response (`GET /api/current-user`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CurrentUserResponse {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_decodes_soft_failure_without_success_field() {
        let resp: LoginResponse = serde_json::from_str(r#"{"error":"user locked"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("user locked"));
    }

    #[test]
    fn current_user_decodes_logged_out_shape() {
        let resp: CurrentUserResponse = serde_json::from_str(r#"{"logged_in":false}"#).unwrap();
        assert!(!resp.logged_in);
        assert!(resp.username.is_none());
    }
}
