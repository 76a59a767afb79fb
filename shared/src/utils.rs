//! # Shared Display Helpers
//!
//! Small formatting functions used by every surface that renders trial data.
//!
//! - [`truncate_text`] - Truncate long prose (summaries, descriptions) with
//!   an ellipsis, safely on character boundaries
//! - [`format_timestamp`] - Render an RFC 3339 timestamp as a short date

use chrono::DateTime;

/// Truncate `text` to at most `max_chars` characters, appending `...` when
/// anything was cut. Operates on characters, not bytes, so multi-byte
/// input never panics.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

/// Render an RFC 3339 timestamp as a short human date, e.g.
/// `2026-03-14T09:26:53Z` becomes `Mar 14, 2026`.
///
/// Unparseable input is returned unchanged; display code should never fail
/// because the backend stamped something unexpected.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_timestamp;
///
/// assert_eq!(format_timestamp("2026-03-14T09:26:53Z"), "Mar 14, 2026");
/// assert_eq!(format_timestamp("not a date"), "not a date");
/// ```
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        // 6 characters, 18 bytes; a byte slice at 4 would panic
        assert_eq!(truncate_text("триали", 4), "триа...");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-03-14T09:26:53Z"), "Mar 14, 2026");
        assert_eq!(format_timestamp("2026-03-04T00:00:00+02:00"), "Mar 4, 2026");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
