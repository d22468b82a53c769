use crate::domain::suggestion::{Suggestion, SuggestionInsert};
use crate::domain::types::SuggestionContent;
use crate::dto::chatbot::{AddSuggestionResponse, SuggestionsResponse};
use crate::forms::chatbot::AddSuggestionPayload;
use crate::repository::{SuggestionReader, SuggestionWriter};

use super::{ServiceError, ServiceResult};

/// Prompts offered before users have sent anything.
pub const DEFAULT_SUGGESTIONS: [&str; 8] = [
    "List all products",
    "Show product categories",
    "Show brands",
    "List all users",
    "How many products in stock?",
    "How many suppliers?",
    "Show out of stock products",
    "Show user permissions",
];

/// Insert any missing default suggestion. Safe to call repeatedly.
pub fn seed_default_suggestions<R>(repo: &R) -> ServiceResult<usize>
where
    R: SuggestionWriter,
{
    let defaults = DEFAULT_SUGGESTIONS
        .iter()
        .map(|s| SuggestionContent::new(*s))
        .collect::<Result<Vec<_>, _>>()?;

    repo.seed_suggestions(&defaults).map_err(|e| {
        log::error!("Failed to seed suggestions: {e}");
        ServiceError::DataUnavailable(e.to_string())
    })
}

/// Most used suggestions, seeding the defaults first if the table is empty.
pub fn top_suggestions<R>(limit: usize, repo: &R) -> ServiceResult<SuggestionsResponse>
where
    R: SuggestionReader + SuggestionWriter,
{
    let list = |repo: &R| -> ServiceResult<Vec<Suggestion>> {
        repo.list_top_suggestions(limit).map_err(|e| {
            log::error!("Failed to list suggestions: {e}");
            ServiceError::DataUnavailable(e.to_string())
        })
    };

    let mut suggestions = list(repo)?;
    if suggestions.is_empty() {
        let inserted = seed_default_suggestions(repo)?;
        log::info!("Suggestion table was empty, seeded {inserted} defaults");
        suggestions = list(repo)?;
    }

    Ok(suggestions.into())
}

/// Add a suggestion unless identical text is already stored.
pub fn add_suggestion<R>(payload: AddSuggestionPayload, repo: &R) -> ServiceResult<AddSuggestionResponse>
where
    R: SuggestionWriter,
{
    match repo.create_suggestion(&payload.content) {
        Ok(SuggestionInsert::Created) => Ok(AddSuggestionResponse::ADDED),
        Ok(SuggestionInsert::Exists) => Ok(AddSuggestionResponse::EXISTS),
        Err(e) => {
            log::error!("Failed to add suggestion: {e}");
            Err(ServiceError::DataUnavailable(e.to_string()))
        }
    }
}
