//! Chat request and response bodies

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `message` field as sent by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageField {
    /// Field absent; treated as an empty message
    #[default]
    Missing,
    Text(String),
    /// `null` or any non-string JSON value
    Invalid(Value),
}

impl<'de> Deserialize<'de> for MessageField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Self::Text(text),
            other => Self::Invalid(other),
        })
    }
}

/// `POST /api/chat` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: MessageField,
}

impl ChatRequest {
    /// The message text, or `None` when the field holds something other than a string
    pub fn text(&self) -> Option<&str> {
        match &self.message {
            MessageField::Missing => Some(""),
            MessageField::Text(text) => Some(text),
            MessageField::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
