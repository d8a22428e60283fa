//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for matches and commentary
//! - Repository abstractions for data access
//! - Database migrations
//! - The CRUD walkthrough run by the demo binary

pub mod entities;
pub mod migration;
pub mod repositories;
pub mod walkthrough;

pub use repositories::{
    CommentaryRepository, CreateCommentaryInput, CreateMatchInput, MatchRepository,
};
pub use walkthrough::{MatchFixture, WalkthroughOutcome, WalkthroughReport};

use std::time::Duration;

use matchday_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Builds pool options from configuration.
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let timeout = Duration::from_secs(config.connect_timeout_secs);

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(config.sqlx_logging);

    if let Some(idle) = config.idle_timeout_secs {
        opt.idle_timeout(Duration::from_secs(idle));
    }

    opt
}

/// Opens the connection pool.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    Database::connect(connect_options(config)).await
}
