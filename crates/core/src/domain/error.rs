// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid sort column: {0:?}")]
    InvalidSortColumn(String),

    #[error("Invalid sort direction: {0:?}")]
    InvalidSortDirection(String),

    #[error("Too many meeting ids: {count} (max {max})")]
    TooManyMeetingIds { count: usize, max: usize },

    #[error("Timestamp out of range: {seconds}s {nanos}ns")]
    TimestampOutOfRange { seconds: i64, nanos: u32 },

    #[error("Unknown race status: {0:?}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
