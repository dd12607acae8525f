// Race catalogue seeding

use crate::error::map_sqlx_error;
use crate::time_format::format_store_time;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use racing_core::error::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;
use tracing::{debug, info};

const MEETING_COUNT: i64 = 10;
const MAX_RACE_NUMBER: i64 = 12;
/// Start times land within this many seconds either side of "now"
const START_WINDOW_SECS: i64 = 2 * 24 * 60 * 60;

const ADJECTIVES: &[&str] = &[
    "Golden", "Silver", "Royal", "Northern", "Southern", "Grand", "Midnight", "Coastal",
    "Highland", "Autumn", "Spring", "Imperial",
];
const NOUNS: &[&str] = &[
    "Cup", "Stakes", "Plate", "Handicap", "Classic", "Sprint", "Derby", "Mile", "Guineas",
    "Trophy",
];

/// One race row to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSeed {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

/// Generate `count` races with ids `1..=count` around `now`
pub fn generate_races<R: Rng + ?Sized>(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<RaceSeed> {
    let now = now.trunc_subsecs(0);

    (1..=count as i64)
        .map(|id| {
            let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Maiden");
            let noun = NOUNS.choose(rng).copied().unwrap_or("Stakes");
            let offset = rng.gen_range(-START_WINDOW_SECS..=START_WINDOW_SECS);

            RaceSeed {
                id,
                meeting_id: rng.gen_range(1..=MEETING_COUNT),
                name: format!("{} {}", adjective, noun),
                number: rng.gen_range(1..=MAX_RACE_NUMBER),
                visible: rng.gen_bool(0.5),
                advertised_start_time: now + Duration::seconds(offset),
            }
        })
        .collect()
}

/// Insert races in a single transaction
pub async fn insert_races(pool: &SqlitePool, races: &[RaceSeed]) -> Result<()> {
    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    for race in races {
        sqlx::query(
            r#"
            INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(race.id)
        .bind(race.meeting_id)
        .bind(&race.name)
        .bind(race.number)
        .bind(race.visible)
        .bind(format_store_time(&race.advertised_start_time))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;
    }

    tx.commit().await.map_err(map_sqlx_error)?;
    debug!(count = races.len(), "Inserted races");
    Ok(())
}

/// Populate an empty races table with `count` random races.
///
/// Returns the number inserted; a table that already has rows is left alone
/// (persistent databases survive restarts).
pub async fn seed_races(pool: &SqlitePool, count: usize, now: DateTime<Utc>) -> Result<usize> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM races")
        .fetch_one(pool)
        .await
        .map_err(map_sqlx_error)?;

    if existing > 0 {
        info!(existing, "Races table already populated, skipping seed");
        return Ok(0);
    }

    let races = generate_races(count, now, &mut StdRng::from_entropy());
    insert_races(pool, &races).await?;

    Ok(races.len())
}
