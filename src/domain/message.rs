use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{MessageContent, MessageId};

/// A logged chat message. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub content: MessageContent,
    /// `true` for the user's side of a turn, `false` for the bot's reply.
    pub is_user: bool,
    pub timestamp: NaiveDateTime,
}

/// Information required to log a new [`Message`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMessage {
    pub content: MessageContent,
    pub is_user: bool,
    pub timestamp: NaiveDateTime,
}

/// Both rows written for one chatbot turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub user_message: Message,
    pub bot_message: Message,
    /// Whether the user text matched a suggestion whose usage was bumped.
    pub suggestion_used: bool,
}
