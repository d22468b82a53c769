pub mod chatbot;
pub mod errors;
pub mod history;
pub mod suggestions;

pub use errors::{ServiceError, ServiceResult};
