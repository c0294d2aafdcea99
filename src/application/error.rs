use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::value_objects::validation::FieldRule;

/// Typed outcome of a usecase call. The HTTP layer maps these to status
/// codes; anything wrapped in `Internal` stays a 500 and is never shown to
/// the client.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request payload")]
    Validation(Vec<FieldRule>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Maps database constraint rejections on a write back to the conflict
    /// the uniqueness pre-check would have produced. The constraint at the
    /// storage layer is the final authority when two writes race.
    pub fn from_write_error(
        err: anyhow::Error,
        unique_message: &str,
        reference_message: &str,
    ) -> Self {
        match err.downcast_ref::<DieselError>() {
            Some(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                ServiceError::Conflict(unique_message.to_string())
            }
            Some(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
                ServiceError::Conflict(reference_message.to_string())
            }
            _ => ServiceError::Internal(err),
        }
    }
}
