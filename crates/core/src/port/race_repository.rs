// Race Repository Port (Interface)

use crate::domain::{ListFilter, Race, RaceId, SortSpec};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only repository interface for the race catalogue
#[async_trait]
pub trait RaceRepository: Send + Sync {
    /// Populate the store once per process.
    ///
    /// Concurrent callers share a single attempt and its outcome; after a
    /// failure the next call tries again.
    async fn init(&self) -> Result<()>;

    /// List races matching `filter`, ordered by `sort` (start time, latest
    /// first, when absent). No match is an empty Vec, not an error.
    async fn list(
        &self,
        filter: Option<&ListFilter>,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<Race>>;

    /// Find race by ID. A missing race is `Ok(None)`.
    async fn get(&self, id: RaceId) -> Result<Option<Race>>;
}
