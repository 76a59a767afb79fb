//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the desktop client and the trials backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, logout, and current-user session DTOs
//! - [`history`] - Medical history (user profile) DTOs
//! - [`trials`] - Search results, protocol records, and saved-trial bookmarks
//! - [`chat`] - Conversational smart-match turns
//! - [`graph`] - Graph-based matching, related trials, recommendations,
//!   and the condition taxonomy
//!
//! ## Serialization Format
//!
//! - **Field naming**: trial/chat/graph payloads use
//!   `#[serde(rename_all = "camelCase")]` to match the registry schema;
//!   auth and history payloads keep serde's default snake_case
//! - **Optional fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Lenient responses**: non-optional response fields carry
//!   `#[serde(default)]` so partial bodies (soft failures, error envelopes)
//!   still decode instead of failing the whole call
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/chat
//! Content-Type: application/json
//!
//! {
//!   "message": "I have asthma and live in Denver",
//!   "conversationHistory": []
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "assistantMessage": "I found 3 trials that may fit...",
//!   "trials": [{ "nctId": "NCT01234567", "title": "...", "status": "RECRUITING",
//!                "phase": ["PHASE2"], "matchScore": 0.87 }],
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```

pub mod auth;
pub mod chat;
pub mod graph;
pub mod history;
pub mod trials;

pub use auth::*;
pub use chat::*;
pub use graph::*;
pub use history::*;
pub use trials::*;
