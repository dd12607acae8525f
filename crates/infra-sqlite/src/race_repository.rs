// SQLite RaceRepository Implementation

use crate::error::map_sqlx_error;
use crate::queries::{GET_RACE, LIST_RACES};
use crate::query_builder::{apply_sort, build_list};
use crate::row_mapper::{scan_many, scan_one, RaceRow};
use crate::seed;
use crate::time_format::format_store_time;
use async_trait::async_trait;
use racing_core::application::InitOnce;
use racing_core::domain::{ListFilter, Race, RaceId, SortOrder, SortSpec};
use racing_core::error::Result;
use racing_core::port::{RaceRepository, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, info};

/// How `init` populates the store
#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub race_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { race_count: 100 }
    }
}

pub struct SqliteRaceRepository {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
    seed: SeedConfig,
    init: InitOnce,
}

impl SqliteRaceRepository {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
            seed: SeedConfig::default(),
            init: InitOnce::new(),
        }
    }

    pub fn with_seed(mut self, seed: SeedConfig) -> Self {
        self.seed = seed;
        self
    }

    /// Evaluation instant for the status CASE, in stored form
    fn now_param(&self) -> String {
        format_store_time(&self.time_provider.now())
    }
}

#[async_trait]
impl RaceRepository for SqliteRaceRepository {
    async fn init(&self) -> Result<()> {
        let pool = self.pool.clone();
        let count = self.seed.race_count;
        let now = self.time_provider.now();

        self.init
            .call(move || async move {
                let inserted = seed::seed_races(&pool, count, now).await?;
                info!(inserted, "Race catalogue seeded");
                Ok(())
            })
            .await
    }

    async fn list(
        &self,
        filter: Option<&ListFilter>,
        sort: Option<&SortSpec>,
    ) -> Result<Vec<Race>> {
        // Reject bad input before touching the store
        if let Some(filter) = filter {
            filter.validate()?;
        }
        let order = match sort {
            Some(spec) => spec.resolve()?,
            None => SortOrder::default(),
        };

        let (query, args) = build_list(LIST_RACES, filter);
        let query = apply_sort(query, &order);

        debug!(
            meeting_ids = args.len(),
            visible_only = filter.map(|f| f.visible_only).unwrap_or(false),
            column = order.column.as_sql(),
            direction = order.direction.as_sql(),
            "Listing races"
        );

        let mut q = sqlx::query_as::<_, RaceRow>(&query).bind(self.now_param());
        for arg in args {
            q = q.bind(arg);
        }

        scan_many(q.fetch(&self.pool)).await
    }

    async fn get(&self, id: RaceId) -> Result<Option<Race>> {
        let row = sqlx::query_as::<_, RaceRow>(GET_RACE)
            .bind(self.now_param())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        scan_one(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{insert_races, RaceSeed};
    use crate::{create_pool, run_migrations};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use racing_core::domain::RaceStatus;
    use racing_core::error::AppError;
    use racing_core::port::time_provider::FixedTimeProvider;

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn race(id: i64, meeting_id: i64, visible: bool, offset_mins: i64) -> RaceSeed {
        RaceSeed {
            id,
            meeting_id,
            name: format!("Race {}", id),
            number: id,
            visible,
            advertised_start_time: frozen_now() + Duration::minutes(offset_mins),
        }
    }

    async fn setup_test_repo() -> (SqlitePool, SqliteRaceRepository) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let time_provider = Arc::new(FixedTimeProvider::new(frozen_now()));
        let repo = SqliteRaceRepository::new(pool.clone(), time_provider);
        (pool, repo)
    }

    async fn setup_with_fixtures() -> SqliteRaceRepository {
        let (pool, repo) = setup_test_repo().await;
        insert_races(
            &pool,
            &[
                race(1, 5, true, -60),
                race(2, 7, false, 30),
                race(3, 9, true, 120),
                race(4, 5, false, -5),
                race(5, 7, true, 0),
            ],
        )
        .await
        .unwrap();
        repo
    }

    fn ids(races: &[Race]) -> Vec<i64> {
        races.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_list_default_order_is_start_desc() {
        let repo = setup_with_fixtures().await;

        let races = repo.list(None, None).await.unwrap();
        assert_eq!(ids(&races), vec![3, 2, 5, 4, 1]);
    }

    #[tokio::test]
    async fn test_status_against_frozen_clock() {
        let repo = setup_with_fixtures().await;

        let races = repo.list(None, None).await.unwrap();
        for race in &races {
            let expected = match race.id {
                1 | 4 => RaceStatus::Closed,
                // id 5 starts exactly at "now"
                _ => RaceStatus::Open,
            };
            assert_eq!(race.status, expected, "race {}", race.id);
        }
    }

    #[tokio::test]
    async fn test_filter_by_meetings_ignores_visibility() {
        let repo = setup_with_fixtures().await;

        let filter = ListFilter::meetings([5, 7]);
        let races = repo.list(Some(&filter), None).await.unwrap();

        assert_eq!(ids(&races), vec![2, 5, 4, 1]);
        assert!(races.iter().any(|r| !r.visible));
    }

    #[tokio::test]
    async fn test_filter_visible_only() {
        let repo = setup_with_fixtures().await;

        let races = repo
            .list(Some(&ListFilter::visible_only()), None)
            .await
            .unwrap();

        assert_eq!(ids(&races), vec![3, 5, 1]);
        assert!(races.iter().all(|r| r.visible));
    }

    #[tokio::test]
    async fn test_combined_filter_and_sort() {
        let repo = setup_with_fixtures().await;

        let filter = ListFilter {
            meeting_ids: vec![5, 7],
            visible_only: true,
        };
        let sort = SortSpec::new("id", "asc");
        let races = repo.list(Some(&filter), Some(&sort)).await.unwrap();

        assert_eq!(ids(&races), vec![1, 5]);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_error() {
        let repo = setup_with_fixtures().await;

        let races = repo
            .list(Some(&ListFilter::meetings([999])), None)
            .await
            .unwrap();
        assert!(races.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_sort_is_validation_error() {
        let repo = setup_with_fixtures().await;

        let sort = SortSpec::new("name; DROP TABLE races", "asc");
        let err = repo.list(None, Some(&sort)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Table still there
        assert_eq!(repo.list(None, None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_oversized_meeting_list_is_validation_error() {
        let repo = setup_with_fixtures().await;

        let filter = ListFilter::meetings(0..40_000);
        let err = repo.list(Some(&filter), None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{:?}", err);

        let filter = ListFilter::meetings(0..ListFilter::MAX_MEETING_IDS as i64);
        assert_eq!(repo.list(Some(&filter), None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_get_found_and_missing() {
        let repo = setup_with_fixtures().await;

        let race = repo.get(3).await.unwrap().unwrap();
        assert_eq!(race.meeting_id, 9);
        assert_eq!(race.name, "Race 3");
        assert_eq!(race.status, RaceStatus::Open);

        assert!(repo.get(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_round_trips_start_time() {
        let (pool, repo) = setup_test_repo().await;
        let start = Utc
            .with_ymd_and_hms(2030, 7, 14, 9, 30, 15)
            .unwrap()
            .checked_add_signed(Duration::microseconds(123_456))
            .unwrap();

        let mut seed = race(42, 1, true, 0);
        seed.advertised_start_time = start;
        insert_races(&pool, &[seed]).await.unwrap();

        let race = repo.get(42).await.unwrap().unwrap();
        assert_eq!(race.advertised_start_time.to_datetime(), Some(start));
    }

    #[tokio::test]
    async fn test_corrupt_start_time_is_malformed_timestamp() {
        let (pool, repo) = setup_test_repo().await;
        sqlx::query(
            "INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time) \
             VALUES (1, 1, 'Broken', 1, 1, 'not-a-time')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = repo.get(1).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)), "{:?}", err);

        let err = repo.list(None, None).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_init_seeds_once() {
        let (pool, repo) = setup_test_repo().await;
        let repo = Arc::new(repo.with_seed(SeedConfig { race_count: 30 }));

        let mut handles = vec![];
        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move { repo.init().await }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        repo.init().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 30);
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        // No migrations yet: seeding fails on the missing table
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let repo = SqliteRaceRepository::new(
            pool.clone(),
            Arc::new(FixedTimeProvider::new(frozen_now())),
        )
        .with_seed(SeedConfig { race_count: 5 });

        let err = repo.init().await.unwrap_err();
        assert!(matches!(err, AppError::SeedFailure(_)));

        run_migrations(&pool).await.unwrap();
        repo.init().await.unwrap();

        assert_eq!(repo.list(None, None).await.unwrap().len(), 5);
    }
}
