// Stored timestamp format

use chrono::{DateTime, SecondsFormat, Utc};

/// Render an instant the way `races.advertised_start_time` stores it.
///
/// Fixed-width RFC 3339 in UTC with microseconds, e.g.
/// `2024-03-01T12:00:00.000000Z`, so text comparison in SQL matches
/// chronological order.
pub fn format_store_time(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
