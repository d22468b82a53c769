use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::message::NewMessage;
use crate::domain::types::{MessageContent, SuggestionContent, TypeConstraintError};

/// JSON body shared by `POST /chatbot` and `POST /add-suggestion`.
///
/// A missing `message` deserializes as empty so it fails validation like a
/// blank one instead of being rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MessageForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl MessageForm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum MessageFormError {
    #[error("Message form validation failed: {0}")]
    Validation(String),
    #[error("Message form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for MessageFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for MessageFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// A chat message that survived validation and trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessagePayload {
    pub message: MessageContent,
}

impl ChatMessagePayload {
    /// The user's side of a turn, stamped with the current time.
    pub fn into_new_message(self) -> NewMessage {
        NewMessage {
            content: self.message,
            is_user: true,
            timestamp: Utc::now().naive_utc(),
        }
    }
}

impl TryFrom<MessageForm> for ChatMessagePayload {
    type Error = MessageFormError;

    fn try_from(value: MessageForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            message: MessageContent::new(value.message)?,
        })
    }
}

/// Text of a suggestion to add, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AddSuggestionPayload {
    pub content: SuggestionContent,
}

impl TryFrom<MessageForm> for AddSuggestionPayload {
    type Error = MessageFormError;

    fn try_from(value: MessageForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            content: SuggestionContent::new(value.message)?,
        })
    }
}

/// Query string of `GET /history`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

impl HistoryQuery {
    /// Requested limit, or `default` when absent, clamped to `1..=max`.
    pub fn resolve(&self, default: usize, max: usize) -> usize {
        let max = max.max(1);
        self.limit.unwrap_or(default).clamp(1, max)
    }
}
