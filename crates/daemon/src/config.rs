//! Server configuration (flags with environment fallbacks)

use clap::{Parser, ValueEnum};

const DEFAULT_DB_PATH: &str = "~/.racing/races.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "racing-server")]
#[command(about = "Racing catalogue JSON-RPC server", long_about = None)]
#[command(version)]
pub struct Config {
    /// JSON-RPC endpoint to bind (host:port)
    #[arg(long, env = "RACING_RPC_ENDPOINT", default_value = "127.0.0.1:9000")]
    pub rpc_endpoint: String,

    /// SQLite database path, or sqlite::memory:
    #[arg(long, env = "RACING_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: String,

    /// Races generated when the database starts empty
    #[arg(long, env = "RACING_SEED_COUNT", default_value_t = 100)]
    pub seed_count: usize,

    /// Log output format
    #[arg(long, env = "RACING_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    /// Database path with `~` expanded
    pub fn database_path(&self) -> String {
        shellexpand::tilde(&self.db_path).into_owned()
    }
}
