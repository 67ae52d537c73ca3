use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures of the museum store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No museum row matched the id.
    #[error("museum not found")]
    NotFound,

    /// A stored museum, artwork or exhibition row breaks a domain invariant.
    #[error("stored museum record is corrupt: {0}")]
    CorruptRecord(#[from] TypeConstraintError),

    /// Writing the museum or its relations violated a foreign key or uniqueness rule.
    #[error("museum constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("museum store unavailable: {0}")]
    ConnectionError(String),

    #[error("museum query failed: {0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::ConstraintViolation(format!(
                    "artworks or exhibitions reference a missing museum: {}",
                    info.message()
                ))
            }
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::ConstraintViolation(format!(
                    "duplicate museum id: {}",
                    info.message()
                ))
            }
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
