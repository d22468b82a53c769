use actix_web::web;

pub mod api;

/// Register the assistant endpoints on an application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::chatbot)
        .service(api::suggestions)
        .service(api::history)
        .service(api::add_suggestion);
}
