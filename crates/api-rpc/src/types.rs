//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use racing_core::domain::{ListFilter, Race, RaceId, SortSpec};
use serde::{Deserialize, Serialize};

/// racing.list_races.v1 - List races
#[derive(Debug, Default, Deserialize)]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<ListRacesFilter>,
    #[serde(default)]
    pub order_by: Option<ListRacesOrderBy>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRacesFilter {
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    #[serde(default)]
    pub visible_only: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRacesOrderBy {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl From<ListRacesFilter> for ListFilter {
    fn from(f: ListRacesFilter) -> Self {
        ListFilter {
            meeting_ids: f.meeting_ids,
            visible_only: f.visible_only,
        }
    }
}

impl From<ListRacesOrderBy> for SortSpec {
    fn from(o: ListRacesOrderBy) -> Self {
        SortSpec {
            column: o.column,
            direction: o.direction,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// racing.get_race.v1 - Fetch one race
#[derive(Debug, Deserialize)]
pub struct GetRaceRequest {
    pub id: RaceId,
}

/// `race` is null when no race has the requested id
#[derive(Debug, Clone, Serialize)]
pub struct GetRaceResponse {
    pub race: Option<Race>,
}
