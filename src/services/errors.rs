use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request itself is unusable, e.g. an empty message.
    #[error("{0}")]
    Validation(String),
    /// The store could not be reached or a query failed.
    #[error("{0}")]
    DataUnavailable(String),
    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
