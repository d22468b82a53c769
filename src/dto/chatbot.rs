//! JSON bodies returned by the assistant endpoints.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::entity::EntitySpan;
use crate::domain::message::Message;
use crate::domain::suggestion::Suggestion;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDto {
    pub label: String,
    pub text: String,
}

impl From<EntitySpan> for EntityDto {
    fn from(value: EntitySpan) -> Self {
        Self {
            label: value.label,
            text: value.text,
        }
    }
}

/// Reply to `POST /chatbot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatbotResponse {
    pub message: String,
    pub entities: Vec<EntityDto>,
    /// Id of the stored bot message.
    pub message_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

impl From<Vec<Suggestion>> for SuggestionsResponse {
    fn from(value: Vec<Suggestion>) -> Self {
        Self {
            suggestions: value
                .into_iter()
                .map(|s| s.content.into_inner())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageDto {
    pub id: i32,
    pub content: String,
    pub is_user: bool,
    pub timestamp: NaiveDateTime,
}

impl From<Message> for MessageDto {
    fn from(value: Message) -> Self {
        Self {
            id: value.id.get(),
            content: value.content.into_inner(),
            is_user: value.is_user,
            timestamp: value.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageDto>,
}

/// Reply to `POST /add-suggestion`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddSuggestionResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl AddSuggestionResponse {
    pub const EXISTS: Self = Self {
        status: "exists",
        message: "Suggestion already exists",
    };
    pub const ADDED: Self = Self {
        status: "success",
        message: "Suggestion added successfully",
    };
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
