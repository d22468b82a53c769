use chrono::Utc;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::message::NewMessage;
use crate::domain::types::MessageContent;
use crate::dto::chatbot::{ChatbotResponse, EntityDto};
use crate::forms::chatbot::ChatMessagePayload;
use crate::intent::{self, Intent};
use crate::nlp::EntityExtractor;
use crate::render::{self, Overview};
use crate::repository::{CatalogReader, ConversationWriter};

use super::{ServiceError, ServiceResult};

/// Rows shown by the product listing answer.
pub const PRODUCT_LIST_LIMIT: usize = 10;
/// Rows shown by the user listing answer.
pub const USER_LIST_LIMIT: usize = 10;

/// Answer a message from the catalogue without writing anything.
///
/// Unrecognised messages get the echo answer. A failing query fails the whole
/// answer rather than producing partial text.
pub fn respond<R>(message: &str, repo: &R, extractor: &dyn EntityExtractor) -> ServiceResult<String>
where
    R: CatalogReader,
{
    let result = match intent::classify(message) {
        Some(intent) => answer(intent, message, repo, extractor),
        None => Ok(render::fallback(message)),
    };

    result.map_err(|e| {
        log::error!("Failed to answer message: {e}");
        ServiceError::DataUnavailable(e.to_string())
    })
}

fn answer<R>(
    intent: Intent,
    message: &str,
    repo: &R,
    extractor: &dyn EntityExtractor,
) -> RepositoryResult<String>
where
    R: CatalogReader,
{
    let text = match intent {
        Intent::ListProducts => render::products(&repo.list_products(PRODUCT_LIST_LIMIT)?),
        Intent::ProductCategories => render::categories(&repo.list_categories()?),
        Intent::OutOfStock => render::out_of_stock(&repo.list_out_of_stock_products()?),
        Intent::ProductCount => {
            render::product_count(repo.count_products()?, repo.count_in_stock_products()?)
        }
        Intent::Brands => render::brands(&repo.list_brands()?),
        Intent::ListUsers => render::users(&repo.list_users(USER_LIST_LIMIT)?),
        Intent::UserPermissions => render::permissions(&repo.list_permissions(None)?),
        Intent::Suppliers => render::suppliers(&repo.list_suppliers()?),
        Intent::FindProduct => match product_name(message, extractor) {
            Some(name) => {
                render::product_matches(&name, &repo.search_products_by_name(&name)?)
            }
            None => render::UNKNOWN_PRODUCT_NAME.to_string(),
        },
        Intent::DatabaseOverview => render::overview(Overview {
            products: repo.count_products()?,
            categories: repo.count_categories()?,
            brands: repo.count_brands()?,
            users: repo.count_users()?,
            suppliers: repo.count_suppliers()?,
        }),
        Intent::Help => render::HELP.to_string(),
        Intent::CategoryProducts => match intent::category_name(message) {
            Some(name) => match repo.find_category_by_name(name)? {
                Some(category) => render::category_products(
                    category.name.as_str(),
                    &repo.list_products_by_category(category.id)?,
                ),
                None => render::category_products(name, &[]),
            },
            None => render::NO_CATEGORY_NAME.to_string(),
        },
    };
    Ok(text)
}

/// First noun chunk of the original-case message that is not the word
/// "product" itself.
pub fn product_name(message: &str, extractor: &dyn EntityExtractor) -> Option<String> {
    extractor
        .noun_chunks(message)
        .into_iter()
        .find(|chunk| !chunk.to_lowercase().contains("product"))
}

/// Handle one chatbot turn: answer the message, then log both sides of the
/// conversation in a single write.
pub fn process_message<R>(
    payload: ChatMessagePayload,
    repo: &R,
    extractor: &dyn EntityExtractor,
) -> ServiceResult<ChatbotResponse>
where
    R: CatalogReader + ConversationWriter,
{
    let text = payload.message.as_str();
    let entities = extractor
        .extract(text)
        .into_iter()
        .map(EntityDto::from)
        .collect();
    let response = respond(text, repo, extractor)?;

    let user_message = payload.into_new_message();
    let bot_message = NewMessage {
        content: MessageContent::new(response)?,
        is_user: false,
        timestamp: Utc::now().naive_utc(),
    };

    let turn = repo
        .record_turn(&user_message, &bot_message)
        .map_err(|e| {
            log::error!("Failed to record chatbot turn: {e}");
            ServiceError::DataUnavailable(e.to_string())
        })?;

    if turn.suggestion_used {
        log::debug!("Suggestion used: {}", turn.user_message.content);
    }

    Ok(ChatbotResponse {
        message: turn.bot_message.content.into_inner(),
        entities,
        message_id: turn.bot_message.id.get(),
    })
}
