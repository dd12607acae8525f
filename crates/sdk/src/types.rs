//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to list races
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRacesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListRacesFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<ListRacesOrderBy>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRacesFilter {
    pub meeting_ids: Vec<i64>,
    pub visible_only: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRacesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Response from list races
#[derive(Debug, Clone, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// Request to fetch one race
#[derive(Debug, Clone, Serialize)]
pub struct GetRaceRequest {
    pub id: i64,
}

/// Response from get race (`race` is None when the id is unknown)
#[derive(Debug, Clone, Deserialize)]
pub struct GetRaceResponse {
    pub race: Option<Race>,
}

/// Seconds + nanos since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RaceTimestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl RaceTimestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, u32::try_from(self.nanos).ok()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: RaceTimestamp,
    /// "OPEN" or "CLOSED"
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_fields() {
        let json = serde_json::to_value(ListRacesRequest::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_race_from_server_json() {
        let race: Race = serde_json::from_value(serde_json::json!({
            "id": 1,
            "meeting_id": 5,
            "name": "Golden Cup",
            "number": 3,
            "visible": true,
            "advertised_start_time": { "seconds": 1709294400, "nanos": 0 },
            "status": "CLOSED"
        }))
        .unwrap();

        assert_eq!(race.status, "CLOSED");
        assert_eq!(
            race.advertised_start_time.to_datetime().unwrap().to_rfc3339(),
            "2024-03-01T12:00:00+00:00"
        );
    }
}
