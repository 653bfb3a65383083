use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use util::validation::format_validation_errors;
use validator::ValidationErrors;

/// Failure of a service operation, one variant per HTTP outcome.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(what: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{what} {id} not found"))
    }

    /// Maps a unique-constraint violation to `Conflict(message)`; anything else
    /// goes through the regular `From<DbErr>` conversion.
    pub fn conflict_on_unique(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::Conflict(message.to_string())
            }
            _ => err.into(),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(%detail, "Unique constraint violated");
                ServiceError::Conflict("Resource already exists".into())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!(%detail, "Foreign key constraint violated");
                ServiceError::Conflict("Resource is still referenced by other records".into())
            }
            _ => match err {
                DbErr::RecordNotFound(msg) => ServiceError::NotFound(msg),
                other => {
                    tracing::error!(error = %other, "Database failure");
                    ServiceError::Database(other)
                }
            },
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(format_validation_errors(&errors))
    }
}
