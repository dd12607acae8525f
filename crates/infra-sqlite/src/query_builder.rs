// List query construction
//
// Filter values only ever travel as bind arguments. ORDER BY text comes from
// the SortColumn / SortDirection enums, never from the caller.

use racing_core::domain::{ListFilter, SortOrder};

/// Append the WHERE clause for `filter` to `base`.
///
/// Returns the query and its positional arguments (meeting ids in the order
/// given). An absent or empty filter leaves `base` untouched.
pub fn build_list(base: &str, filter: Option<&ListFilter>) -> (String, Vec<i64>) {
    let mut query = base.to_string();
    let mut clauses: Vec<String> = Vec::new();
    let mut args: Vec<i64> = Vec::new();

    let Some(filter) = filter else {
        return (query, args);
    };

    if !filter.meeting_ids.is_empty() {
        let placeholders = vec!["?"; filter.meeting_ids.len()].join(", ");
        clauses.push(format!("meeting_id IN ({})", placeholders));
        args.extend_from_slice(&filter.meeting_ids);
    }

    if filter.visible_only {
        clauses.push("visible = 1".to_string());
    }

    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    (query, args)
}

/// Append ORDER BY for an allow-listed column and direction
pub fn apply_sort(mut query: String, order: &SortOrder) -> String {
    query.push_str(" ORDER BY ");
    query.push_str(order.column.as_sql());
    query.push(' ');
    query.push_str(order.direction.as_sql());
    query
}
