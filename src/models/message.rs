use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::message::{Message as DomainMessage, NewMessage as DomainNewMessage};
use crate::domain::types::{MessageContent, TypeConstraintError};

/// Diesel model representing the `messages` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::messages)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub is_user: bool,
    pub timestamp: NaiveDateTime,
}

/// Insertable form of [`Message`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::messages)]
pub struct NewMessage<'a> {
    pub content: &'a str,
    pub is_user: bool,
    pub timestamp: NaiveDateTime,
}

impl TryFrom<Message> for DomainMessage {
    type Error = TypeConstraintError;

    fn try_from(message: Message) -> Result<Self, Self::Error> {
        Ok(Self {
            id: message.id.try_into()?,
            content: MessageContent::new(message.content)?,
            is_user: message.is_user,
            timestamp: message.timestamp,
        })
    }
}

impl<'a> From<&'a DomainNewMessage> for NewMessage<'a> {
    fn from(message: &'a DomainNewMessage) -> Self {
        Self {
            content: message.content.as_str(),
            is_user: message.is_user,
            timestamp: message.timestamp,
        }
    }
}
