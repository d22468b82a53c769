use diesel::prelude::*;

use crate::domain::suggestion::Suggestion as DomainSuggestion;
use crate::domain::types::{SuggestionContent, TypeConstraintError, UsageCount};

/// Diesel model representing the `suggestions` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suggestions)]
pub struct Suggestion {
    pub id: i32,
    pub content: String,
    pub usage_count: i32,
}

/// Insertable form of [`Suggestion`]; usage starts at the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::suggestions)]
pub struct NewSuggestion<'a> {
    pub content: &'a str,
}

impl TryFrom<Suggestion> for DomainSuggestion {
    type Error = TypeConstraintError;

    fn try_from(suggestion: Suggestion) -> Result<Self, Self::Error> {
        Ok(Self {
            id: suggestion.id.try_into()?,
            content: SuggestionContent::new(suggestion.content)?,
            usage_count: UsageCount::new(suggestion.usage_count)?,
        })
    }
}
