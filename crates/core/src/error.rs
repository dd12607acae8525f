// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection, pool or transport failure talking to the store
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    /// A stored start time could not be turned into a wire timestamp
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Seed failure: {0}")]
    SeedFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSortColumn(_)
            | DomainError::InvalidSortDirection(_)
            | DomainError::TooManyMeetingIds { .. } => AppError::Validation(err.to_string()),
            DomainError::TimestampOutOfRange { .. } => AppError::MalformedTimestamp(err.to_string()),
            DomainError::UnknownStatus(_) => AppError::Internal(err.to_string()),
        }
    }
}

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by a single mapping function (orphan rule)
