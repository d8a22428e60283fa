//! The CRUD walkthrough: create a match and a commentary line, read the match
//! back, update its score, then delete both rows.
//!
//! Every step awaits the previous one. [`run_and_close`] releases the pool
//! whether or not the walkthrough succeeded.

use chrono::{DateTime, Utc};
use matchday_shared::{AppError, AppResult};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::entities::{
    commentary, matches,
    sea_orm_active_enums::{EventType, MatchStatus},
};
use crate::repositories::{
    CommentaryRepository, CreateCommentaryInput, CreateMatchInput, MatchRepository,
};

/// Values written by the walkthrough.
#[derive(Debug, Clone)]
pub struct MatchFixture {
    /// Sport of the created match.
    pub sport: String,
    /// Home team of the created match.
    pub home_team: String,
    /// Away team of the created match.
    pub away_team: String,
    /// Kick-off of the created match.
    pub start_time: DateTime<Utc>,
    /// Minute of the commentary line.
    pub minute: i32,
    /// Text of the commentary line.
    pub message: String,
    /// Event of the commentary line.
    pub event_type: EventType,
    /// Home score written by the update step.
    pub updated_home_score: i32,
    /// Status written by the update step.
    pub updated_status: MatchStatus,
}

impl Default for MatchFixture {
    fn default() -> Self {
        Self {
            sport: "Soccer".to_string(),
            home_team: "Team A".to_string(),
            away_team: "Team B".to_string(),
            start_time: Utc::now(),
            minute: 10,
            message: "Goal for Team A!".to_string(),
            event_type: EventType::Goal,
            updated_home_score: 1,
            updated_status: MatchStatus::Live,
        }
    }
}

/// Rows returned by each step of a successful walkthrough.
#[derive(Debug, Clone)]
pub struct WalkthroughReport {
    /// Row returned by the match insert.
    pub created_match: matches::Model,
    /// Row returned by the commentary insert.
    pub created_commentary: commentary::Model,
    /// Row returned by the read.
    pub found_match: matches::Model,
    /// Row returned by the update.
    pub updated_match: matches::Model,
    /// Commentary rows removed.
    pub commentary_deleted: u64,
    /// Match rows removed.
    pub matches_deleted: u64,
}

/// Result of a walkthrough followed by pool shutdown.
#[derive(Debug)]
pub struct WalkthroughOutcome {
    /// What the walkthrough produced.
    pub result: AppResult<WalkthroughReport>,
    /// Whether the pool closed without error.
    pub pool_closed: bool,
}

impl WalkthroughOutcome {
    /// True when every step succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs the walkthrough against an open connection.
///
/// # Errors
///
/// Returns the first step's error; later steps are not attempted.
pub async fn run(db: &DatabaseConnection, fixture: &MatchFixture) -> AppResult<WalkthroughReport> {
    let match_repo = MatchRepository::new(db);
    let commentary_repo = CommentaryRepository::new(db);

    let created_match = match_repo
        .create(CreateMatchInput {
            sport: fixture.sport.clone(),
            home_team: fixture.home_team.clone(),
            away_team: fixture.away_team.clone(),
            status: MatchStatus::Scheduled,
            start_time: fixture.start_time,
        })
        .await?;
    info!(match_id = created_match.id, record = ?created_match, "CREATE: new match created");

    let created_commentary = commentary_repo
        .create(CreateCommentaryInput {
            match_id: created_match.id,
            minute: fixture.minute,
            message: fixture.message.clone(),
            event_type: fixture.event_type,
        })
        .await?;
    info!(
        commentary_id = created_commentary.id,
        record = ?created_commentary,
        "CREATE: new commentary added"
    );

    let found_match = match_repo
        .find_by_id(created_match.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("match {}", created_match.id)))?;
    info!(match_id = found_match.id, record = ?found_match, "READ: found match");

    let updated_match = match_repo
        .update_score(
            created_match.id,
            fixture.updated_home_score,
            fixture.updated_status,
        )
        .await?;
    info!(match_id = updated_match.id, record = ?updated_match, "UPDATE: match updated");

    let commentary_deleted = commentary_repo.delete_for_match(created_match.id).await?;
    let matches_deleted = match_repo.delete(created_match.id).await?;
    info!(
        match_id = created_match.id,
        commentary_deleted, matches_deleted, "DELETE: match and commentary deleted"
    );

    Ok(WalkthroughReport {
        created_match,
        created_commentary,
        found_match,
        updated_match,
        commentary_deleted,
        matches_deleted,
    })
}

/// Runs the walkthrough, then closes the pool regardless of the result.
pub async fn run_and_close(db: DatabaseConnection, fixture: &MatchFixture) -> WalkthroughOutcome {
    let result = run(&db, fixture).await;

    match &result {
        Ok(_) => info!("CRUD operations completed successfully"),
        Err(e) => error!(code = e.error_code(), error = %e, "Error performing CRUD operations"),
    }

    let pool_closed = match db.close().await {
        Ok(()) => {
            info!("Database pool closed");
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to close database pool");
            false
        }
    };

    WalkthroughOutcome {
        result,
        pool_closed,
    }
}
