// Race query templates
//
// Both templates take the evaluation instant as their first `?`, consumed by
// the status CASE expression. The list template ends at `FROM races` so the
// query builder can append WHERE / ORDER BY.

pub(crate) const LIST_RACES: &str = r#"
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time,
        CASE
            WHEN advertised_start_time < ? THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM races"#;

pub(crate) const GET_RACE: &str = r#"
    SELECT
        id,
        meeting_id,
        name,
        number,
        visible,
        advertised_start_time,
        CASE
            WHEN advertised_start_time < ? THEN 'CLOSED'
            ELSE 'OPEN'
        END AS status
    FROM races
    WHERE id = ?"#;
