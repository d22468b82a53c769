use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::chatbot::ErrorResponse;
use crate::forms::chatbot::{AddSuggestionPayload, ChatMessagePayload, HistoryQuery, MessageForm};
use crate::models::config::ServerConfig;
use crate::nlp::EntityExtractor;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::chatbot::process_message;
use crate::services::history::message_history;
use crate::services::suggestions::{add_suggestion as add_suggestion_service, top_suggestions};

const NO_MESSAGE: &str = "No message provided";

/// Map a service failure onto a status code and a `{"detail": ...}` body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            log::debug!("Rejected request: {message}");
            HttpResponse::BadRequest().json(ErrorResponse {
                detail: NO_MESSAGE.to_string(),
            })
        }
        ServiceError::DataUnavailable(cause) | ServiceError::Internal(cause) => {
            HttpResponse::InternalServerError().json(ErrorResponse {
                detail: format!("Error: {cause}"),
            })
        }
    }
}

#[post("/chatbot")]
pub async fn chatbot(
    form: web::Json<MessageForm>,
    repo: web::Data<DieselRepository>,
    extractor: web::Data<dyn EntityExtractor>,
) -> impl Responder {
    let payload = match ChatMessagePayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match process_message(payload, repo.get_ref(), extractor.get_ref()) {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(err) => error_response(err),
    }
}

#[get("/suggestions")]
pub async fn suggestions(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match top_suggestions(server_config.suggestion_limit, repo.get_ref()) {
        Ok(suggestions) => HttpResponse::Ok().json(suggestions),
        Err(err) => error_response(err),
    }
}

#[get("/history")]
pub async fn history(
    query: web::Query<HistoryQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let limit = query.resolve(server_config.history_limit, server_config.max_history_limit);
    match message_history(limit, repo.get_ref()) {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(err) => error_response(err),
    }
}

#[post("/add-suggestion")]
pub async fn add_suggestion(
    form: web::Json<MessageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match AddSuggestionPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match add_suggestion_service(payload, repo.get_ref()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response(err),
    }
}
