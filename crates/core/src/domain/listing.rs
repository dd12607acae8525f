// Listing criteria: filter + sort for race queries

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Optional narrowing criteria for a listing.
///
/// An empty `meeting_ids` places no restriction on meetings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    #[serde(default)]
    pub visible_only: bool,
}

impl ListFilter {
    /// Each meeting id becomes one bound parameter; SQLite caps those per statement
    pub const MAX_MEETING_IDS: usize = 1_000;

    pub fn meetings(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            meeting_ids: ids.into_iter().collect(),
            visible_only: false,
        }
    }

    pub fn visible_only() -> Self {
        Self {
            meeting_ids: Vec::new(),
            visible_only: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.meeting_ids.len() > Self::MAX_MEETING_IDS {
            return Err(DomainError::TooManyMeetingIds {
                count: self.meeting_ids.len(),
                max: Self::MAX_MEETING_IDS,
            });
        }
        Ok(())
    }
}

/// Raw, caller-supplied ordering request.
///
/// Nothing here reaches SQL text directly: it must be resolved into a
/// [`SortOrder`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Some(direction.into()),
        }
    }

    /// Resolve against the allow-list. Missing or blank fields take the default.
    pub fn resolve(&self) -> Result<SortOrder> {
        let default = SortOrder::default();

        let column = match non_blank(self.column.as_deref()) {
            Some(raw) => raw.parse()?,
            None => default.column,
        };
        let direction = match non_blank(self.direction.as_deref()) {
            Some(raw) => raw.parse()?,
            None => default.direction,
        };

        Ok(SortOrder { column, direction })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Columns a listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}

impl SortColumn {
    /// Literal column name used in ORDER BY
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::MeetingId => "meeting_id",
            SortColumn::Name => "name",
            SortColumn::Number => "number",
            SortColumn::Visible => "visible",
            SortColumn::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

impl FromStr for SortColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortColumn::Id),
            "meeting_id" => Ok(SortColumn::MeetingId),
            "name" => Ok(SortColumn::Name),
            "number" => Ok(SortColumn::Number),
            "visible" => Ok(SortColumn::Visible),
            "advertised_start_time" => Ok(SortColumn::AdvertisedStartTime),
            _ => Err(DomainError::InvalidSortColumn(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(DomainError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Validated ordering. Defaults to start time, latest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            column: SortColumn::AdvertisedStartTime,
            direction: SortDirection::Desc,
        }
    }
}
