// Race Domain Model

use crate::domain::error::{DomainError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Race ID (store primary key)
pub type RaceId = i64;

/// Race status, derived from the advertised start time at query time.
///
/// Never stored: the value flips from `Open` to `Closed` as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RaceStatus {
    Open,
    Closed,
}

impl RaceStatus {
    /// CLOSED when the start time is strictly before `now`, OPEN otherwise
    pub fn at(advertised_start: &DateTime<Utc>, now: &DateTime<Utc>) -> Self {
        if advertised_start < now {
            RaceStatus::Closed
        } else {
            RaceStatus::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Open => "OPEN",
            RaceStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OPEN" => Ok(RaceStatus::Open),
            "CLOSED" => Ok(RaceStatus::Closed),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Wire timestamp: seconds + nanos since the Unix epoch (UTC).
///
/// Valid range is 0001-01-01T00:00:00Z to 9999-12-31T23:59:59.999999999Z,
/// and `nanos` is always in `0..1_000_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    /// 0001-01-01T00:00:00Z
    pub const MIN_SECONDS: i64 = -62_135_596_800;
    /// 9999-12-31T23:59:59Z
    pub const MAX_SECONDS: i64 = 253_402_300_799;

    /// Back to a chrono instant (None if the fields are out of range)
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = DomainError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self> {
        let seconds = dt.timestamp();
        // chrono reports leap seconds as nanos >= 1e9
        let nanos = dt.timestamp_subsec_nanos();

        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) || nanos >= 1_000_000_000 {
            return Err(DomainError::TimestampOutOfRange { seconds, nanos });
        }

        Ok(Self {
            seconds,
            nanos: nanos as i32,
        })
    }
}

/// Race entity (read-only projection, built fresh on every query)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: RaceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_status_boundary_is_open() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(RaceStatus::at(&now, &now), RaceStatus::Open);
        assert_eq!(
            RaceStatus::at(&(now - Duration::microseconds(1)), &now),
            RaceStatus::Closed
        );
        assert_eq!(
            RaceStatus::at(&(now + Duration::seconds(1)), &now),
            RaceStatus::Open
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("OPEN".parse::<RaceStatus>().unwrap(), RaceStatus::Open);
        assert_eq!("CLOSED".parse::<RaceStatus>().unwrap(), RaceStatus::Closed);
        assert!(matches!(
            "closed".parse::<RaceStatus>(),
            Err(DomainError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_status_serializes_screaming_case() {
        let json = serde_json::to_string(&RaceStatus::Closed).unwrap();
        assert_eq!(json, "\"CLOSED\"");
    }

    #[test]
    fn test_timestamp_from_datetime() {
        let dt = Utc
            .with_ymd_and_hms(2021, 2, 3, 4, 5, 6)
            .unwrap()
            .checked_add_signed(Duration::microseconds(789_012))
            .unwrap();

        let ts = Timestamp::try_from(dt).unwrap();
        assert_eq!(ts.seconds, dt.timestamp());
        assert_eq!(ts.nanos, 789_012_000);
        assert_eq!(ts.to_datetime(), Some(dt));
    }

    #[test]
    fn test_timestamp_rejects_years_before_one() {
        let dt = Utc.with_ymd_and_hms(0, 12, 31, 23, 59, 59).unwrap();
        assert!(matches!(
            Timestamp::try_from(dt),
            Err(DomainError::TimestampOutOfRange { .. })
        ));
    }

    #[test]
    fn test_timestamp_accepts_range_edges() {
        let min = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();

        assert_eq!(Timestamp::try_from(min).unwrap().seconds, Timestamp::MIN_SECONDS);
        assert_eq!(Timestamp::try_from(max).unwrap().seconds, Timestamp::MAX_SECONDS);
    }
}
