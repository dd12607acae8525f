// Racing Infrastructure - SQLite Adapter
// Implements: RaceRepository (list / get / one-time seeding)

mod connection;
mod error;
mod migration;
mod queries;
mod query_builder;
mod race_repository;
mod row_mapper;
pub mod seed;
mod time_format;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use query_builder::{apply_sort, build_list};
pub use race_repository::{SeedConfig, SqliteRaceRepository};
pub use seed::RaceSeed;
pub use time_format::format_store_time;

// Note: sqlx::Error conversion is handled by error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
