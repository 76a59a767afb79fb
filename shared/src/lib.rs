//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the Clinect desktop client
//! and the trials backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Session establishment and resolution DTOs
//!   - **[`dto::history`]**: Medical history (profile) DTOs
//!   - **[`dto::trials`]**: Trial search, protocol record, and bookmark DTOs
//!   - **[`dto::chat`]**: Conversational smart-match DTOs
//!   - **[`dto::graph`]**: Graph-matching, related-trial, and recommendation DTOs
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::truncate_text`]**: Truncate long text with ellipsis
//!   - **[`utils::format_timestamp`]**: Render RFC 3339 timestamps for display
//!
//! ## Wire Format
//!
//! - Trial, chat, and graph payloads use **camelCase** keys
//!   (`#[serde(rename_all = "camelCase")]`), matching the public trials
//!   registry schema the backend mirrors.
//! - Auth and history payloads use the backend's **snake_case** keys
//!   (default `serde` behavior).
//! - Optional fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`).
//! - Non-optional response fields default when absent, so soft-failure bodies
//!   (`{"success": false, "error": "..."}`) still decode.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::chat::{ChatMessage, ChatRequest};
//!
//! let request = ChatRequest {
//!     message: "I have type 2 diabetes".to_string(),
//!     conversation_history: vec![ChatMessage::user("Hello")],
//! };
//!
//! let json = serde_json::to_string(&request).unwrap();
//! assert!(json.contains("conversationHistory"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
