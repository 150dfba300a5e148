//! Conversation history types.
//!
//! A conversation is an append-only sequence of messages: once a message is
//! in the history it is never edited or removed. Failures appear as
//! assistant-role messages so the history shows what happened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A document citation attached to an assistant answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Source {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            page: None,
        }
    }
}

/// A single entry in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: Uuid,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub text: String,

    /// Citations backing an assistant answer. Always empty for user messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,

    /// When the message entered the history
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message carrying an answer and its citations.
    pub fn assistant(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            text: text.into(),
            sources,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_carry_no_sources() {
        let msg = Message::user("What is the refund policy?");
        assert_eq!(msg.role, Role::User);
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn assistant_message_keeps_source_order() {
        let msg = Message::assistant(
            "30 days",
            vec![Source::new("policy.pdf"), Source::new("faq.txt")],
        );
        assert_eq!(msg.sources[0].filename, "policy.pdf");
        assert_eq!(msg.sources[1].filename, "faq.txt");
    }

    #[test]
    fn source_page_is_optional_in_json() {
        let source: Source = serde_json::from_str(r#"{"filename": "policy.pdf"}"#).unwrap();
        assert_eq!(source.page, None);

        let with_page: Source =
            serde_json::from_str(r#"{"filename": "policy.pdf", "page": 3}"#).unwrap();
        assert_eq!(with_page.page, Some(3));
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::assistant("hello", vec![Source::new("a.pdf")]);
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text, "hello");
        assert_eq!(back.role, Role::Assistant);
        assert_eq!(back.sources.len(), 1);
    }
}
