//! Conversational smart-match turns.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::dto::graph::{MatchResult, SmartMatchRequest};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One turn in the assistant conversation. Assistant messages may carry
/// trial matches found during the turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trials: Option<Vec<MatchResult>>,
    /// RFC 3339.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
            trials: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
            trials: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<ChatMessage>,
}

/// Response for one conversational turn. `extracted_criteria` reports the
/// structured search the language model derived from the conversation, when
/// it ran one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub assistant_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trials: Option<Vec<MatchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_criteria: Option<SmartMatchRequest>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::Assistant).unwrap(), r#""assistant""#);
    }

    #[test]
    fn user_constructor_stamps_an_rfc3339_timestamp() {
        let message = ChatMessage::user("hello");
        assert_eq!(message.role, ChatRole::User);
        assert!(chrono::DateTime::parse_from_rfc3339(&message.timestamp).is_ok());
    }

    #[test]
    fn request_uses_camel_case_history_key() {
        let request = ChatRequest {
            message: "hi".to_string(),
            conversation_history: Vec::new(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""conversationHistory":[]"#));
    }

    #[test]
    fn soft_failure_response_decodes_without_assistant_message() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"success":false,"error":"model overloaded"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.assistant_message.is_empty());
        assert_eq!(resp.error.as_deref(), Some("model overloaded"));
    }
}
