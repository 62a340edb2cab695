//! Archiver Entry Point
//!
//! Standalone worker that runs the archive scheduler: a periodic sweep
//! finds active spaces whose window has closed and freezes each one into
//! its session record.
//! Uses `anyhow` for startup errors; application-level errors stay in
//! `spaces::SpaceError`.

use std::env;
use std::sync::Arc;

use spaces::store::SpaceStore;
use spaces::{ArchiveConfig, ArchiveScheduler};
use sqlx::postgres::PgPoolOptions;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archiver=info,spaces=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Sweep cadence and per-space bound, overridable per environment
    let config = ArchiveConfig::from_secs(
        env_secs("SWEEP_INTERVAL_SECS", 300),
        env_secs("SPACE_TIMEOUT_SECS", 30),
    );

    let store = Arc::new(SpaceStore::new(pool));
    let scheduler = Arc::new(ArchiveScheduler::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        config,
    ));

    scheduler.start().await;

    shutdown_signal().await;

    // Let an in-flight sweep finish before exiting
    scheduler.stop().await;
    tracing::info!("Archiver shut down");

    Ok(())
}

fn env_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
