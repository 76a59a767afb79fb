/// Validation utilities for user input

use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate the login username. Mock auth accepts anything non-blank; the
/// backend owns every other rule.
pub fn validate_username(username: &str) -> ValidationResult {
    if username.trim().is_empty() {
        return ValidationResult::err("Username is required");
    }

    ValidationResult::ok()
}

/// Parse the profile age field. Blank means "unset"; anything else must be a
/// whole number of years.
pub fn parse_age(input: &str) -> Result<Option<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| AppError::Validation("Age must be a whole number".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_valid);
        assert!(validate_username("a").is_valid);

        let blank = validate_username("   ");
        assert!(!blank.is_valid);
        assert_eq!(blank.error.as_deref(), Some("Username is required"));

        assert!(!validate_username("").is_valid);
    }

    #[test]
    fn test_parse_age() {
        assert!(matches!(parse_age(""), Ok(None)));
        assert!(matches!(parse_age("  "), Ok(None)));
        assert!(matches!(parse_age("34"), Ok(Some(34))));
        assert!(matches!(parse_age(" 34 "), Ok(Some(34))));
        assert!(matches!(parse_age("thirty"), Err(AppError::Validation(_))));
        assert!(parse_age("-3").is_err());
        assert!(parse_age("3.5").is_err());
    }
}
