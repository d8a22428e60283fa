//! Match and commentary CRUD walkthrough.
//!
//! Connects to the database, creates a match and a commentary line, reads the
//! match back, updates its score, deletes both rows and closes the pool.
//! Exits with status 1 if any step fails.
//!
//! Usage: cargo run --bin matchday-demo

use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use matchday_db::{MatchFixture, walkthrough};
use matchday_shared::{AppConfig, LogConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log);

    info!("Performing CRUD operations for real-time sports app...");

    let db = matchday_db::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    info!("Connected to database");

    let outcome = walkthrough::run_and_close(db, &MatchFixture::default()).await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
