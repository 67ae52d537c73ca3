use thiserror::Error;

use crate::forms::FieldErrors;
use crate::repository::errors::RepositoryError;

pub mod museum;

/// Errors surfaced by the service layer to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist. Carries a message for the client.
    #[error("{0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        ServiceError::Validation(errors)
    }
}
