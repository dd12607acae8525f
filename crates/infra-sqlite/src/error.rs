// sqlx::Error -> AppError translation

use racing_core::error::AppError;

/// Column whose decode failures indicate a corrupt start time
const START_TIME_COLUMN: &str = "advertised_start_time";

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    // SQLITE_BUSY, SQLITE_LOCKED, SQLITE_CANTOPEN
                    "5" | "6" | "14" => AppError::StoreUnavailable(format!(
                        "{} ({})",
                        db_err.message(),
                        code_str
                    )),
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::ColumnDecode { index, source } if index.contains(START_TIME_COLUMN) => {
            AppError::MalformedTimestamp(format!("column {}: {}", index, source))
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        sqlx::Error::Configuration(e) => AppError::Config(e.to_string()),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => AppError::StoreUnavailable(err.to_string()),
        _ => AppError::Database(err.to_string()),
    }
}
