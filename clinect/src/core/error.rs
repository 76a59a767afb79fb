//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! ## Error Categories
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **State**: Application state management errors (lock failures, invalid
//!   transitions)
//! - **Validation**: Input validation errors (invalid format, missing fields)
//!
//! API endpoint functions themselves return `Result<T, String>` with
//! user-renderable messages; `AppError` wraps those and the app-internal
//! failure paths behind one type.
//!
//! ## Error Conversion
//!
//! - `String` → `AppError::Api`
//! - `&str` → `AppError::Api`

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String`; `thiserror` provides the
/// `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use clinect::core::error::AppError;
///
/// let api_err = AppError::Api("Connection refused".to_string());
/// let validation_err = AppError::Validation("Username cannot be empty".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection refused");
/// assert_eq!(validation_err.to_string(), "Validation error: Username cannot be empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error: network failures, non-2xx statuses
    /// on must-succeed endpoints, undecodable bodies.
    #[error("API error: {0}")]
    Api(String),

    /// Application state management error: lock contention or an invalid
    /// state transition.
    #[error("State error: {0}")]
    State(String),

    /// User input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use clinect::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_errors_convert_to_api_variant() {
        let err: AppError = "Network error: timed out".to_string().into();
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(err.to_string(), "API error: Network error: timed out");
    }
}
