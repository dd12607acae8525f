// Domain Layer - Race catalogue entities and listing criteria

pub mod error;
pub mod listing;
pub mod race;

// Re-exports
pub use error::DomainError;
pub use listing::{ListFilter, SortColumn, SortDirection, SortOrder, SortSpec};
pub use race::{Race, RaceId, RaceStatus, Timestamp};
