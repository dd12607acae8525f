// Row -> Race mapping

use crate::error::map_sqlx_error;
use chrono::{DateTime, Utc};
use futures::{future, Stream, TryStreamExt};
use racing_core::domain::{Race, RaceStatus, Timestamp};
use racing_core::error::Result;

/// SQLite row representation (six stored columns + derived status)
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct RaceRow {
    id: i64,
    meeting_id: i64,
    name: String,
    number: i64,
    visible: bool,
    advertised_start_time: DateTime<Utc>,
    status: String,
}

impl RaceRow {
    fn into_race(self) -> Result<Race> {
        let advertised_start_time = Timestamp::try_from(self.advertised_start_time)?;
        let status: RaceStatus = self.status.parse()?;

        Ok(Race {
            id: self.id,
            meeting_id: self.meeting_id,
            name: self.name,
            number: self.number,
            visible: self.visible,
            advertised_start_time,
            status,
        })
    }
}

/// Map every row of a cursor; the first failure discards everything read so far
pub(crate) async fn scan_many<S>(rows: S) -> Result<Vec<Race>>
where
    S: Stream<Item = std::result::Result<RaceRow, sqlx::Error>>,
{
    rows.map_err(map_sqlx_error)
        .and_then(|row| future::ready(row.into_race()))
        .try_collect()
        .await
}

/// Map an optional single row; no row is not an error
pub(crate) fn scan_one(row: Option<RaceRow>) -> Result<Option<Race>> {
    row.map(RaceRow::into_race).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::stream;
    use racing_core::error::AppError;

    fn row(id: i64, status: &str) -> RaceRow {
        RaceRow {
            id,
            meeting_id: 3,
            name: "Test Stakes".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_scan_many_preserves_order() {
        let rows = stream::iter(vec![Ok(row(2, "OPEN")), Ok(row(1, "CLOSED"))]);
        let races = scan_many(rows).await.unwrap();

        assert_eq!(races.len(), 2);
        assert_eq!(races[0].id, 2);
        assert_eq!(races[0].status, RaceStatus::Open);
        assert_eq!(races[1].id, 1);
        assert_eq!(races[1].status, RaceStatus::Closed);
    }

    #[tokio::test]
    async fn test_scan_many_aborts_on_row_error() {
        let rows = stream::iter(vec![
            Ok(row(1, "OPEN")),
            Err(sqlx::Error::ColumnDecode {
                index: "\"advertised_start_time\"".to_string(),
                source: "input contains invalid characters".into(),
            }),
            Ok(row(3, "OPEN")),
        ]);

        let err = scan_many(rows).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)));
    }

    #[tokio::test]
    async fn test_scan_many_empty() {
        let rows = stream::iter(Vec::<std::result::Result<RaceRow, sqlx::Error>>::new());
        assert!(scan_many(rows).await.unwrap().is_empty());
    }

    #[test]
    fn test_scan_one_absent() {
        assert!(scan_one(None).unwrap().is_none());
    }

    #[test]
    fn test_scan_one_converts_timestamp() {
        let race = scan_one(Some(row(9, "OPEN"))).unwrap().unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(race.advertised_start_time.seconds, expected.timestamp());
        assert_eq!(race.advertised_start_time.nanos, 0);
    }

    #[test]
    fn test_unknown_status_is_error() {
        let err = scan_one(Some(row(9, "PENDING"))).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_out_of_range_start_is_malformed() {
        let mut bad = row(9, "OPEN");
        bad.advertised_start_time = Utc.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).unwrap();

        let err = scan_one(Some(bad)).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp(_)));
    }
}
