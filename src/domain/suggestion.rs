use serde::{Deserialize, Serialize};

use crate::domain::types::{SuggestionContent, SuggestionId, UsageCount};

/// A canned prompt ranked by how often users send it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub content: SuggestionContent,
    pub usage_count: UsageCount,
}

/// Outcome of inserting a suggestion into a table with unique content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionInsert {
    Created,
    Exists,
}
