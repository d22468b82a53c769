//! Error conversion glue for `data` feature consumers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here where both sides are visible.

use pushkind_common::repository::errors::RepositoryError;

use crate::domain::types::TypeConstraintError;
#[cfg(feature = "server")]
use crate::forms::chatbot::MessageFormError;
#[cfg(feature = "server")]
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

/// Values built by the service itself should always satisfy their
/// constraints, so a failure here is internal.
#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Internal(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<MessageFormError> for ServiceError {
    fn from(val: MessageFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
