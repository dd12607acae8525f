//! Racing Catalogue - Main Entry Point

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, LogFormat};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use racing_api_rpc::{server::RpcServerConfig, RpcServer};
use racing_core::port::time_provider::SystemTimeProvider;
use racing_core::port::RaceRepository;
use racing_infra_sqlite::{create_pool, run_migrations, SeedConfig, SqliteRaceRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // 1. Initialize logging
    init_logging(config.log_format)?;

    info!("Racing catalogue v{} starting...", VERSION);

    // 2. Initialize database
    let db_path = config.database_path();
    ensure_parent_dir(&db_path)?;

    info!(db_path = %db_path, "Initializing database...");

    let pool = create_pool(&db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let race_repo: Arc<dyn RaceRepository> = Arc::new(
        SqliteRaceRepository::new(pool.clone(), time_provider).with_seed(SeedConfig {
            race_count: config.seed_count,
        }),
    );

    // 4. One-time seed
    race_repo.init().await.context("Seeding failed")?;

    // 5. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        endpoint: config.rpc_endpoint.clone(),
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, race_repo)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(%addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("racing=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Create the directory holding a file-backed database
fn ensure_parent_dir(db_path: &str) -> Result<()> {
    if db_path.starts_with("sqlite:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create {}", parent.display()))?;
        }
    }

    Ok(())
}
