//! Match repository for database operations.

use chrono::{DateTime, Utc};
use matchday_shared::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::entities::{matches, sea_orm_active_enums::MatchStatus};

/// Input for creating a match.
///
/// Home and away teams must differ after trimming spaces and lowercasing,
/// the same rule the `chk_matches_teams` constraint applies.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_distinct_teams"))]
pub struct CreateMatchInput {
    /// Sport name, e.g. "Soccer".
    #[validate(length(min = 1, max = 100, message = "Sport cannot be empty"))]
    pub sport: String,
    /// Home team name.
    #[validate(length(min = 1, max = 100, message = "Home team cannot be empty"))]
    pub home_team: String,
    /// Away team name.
    #[validate(length(min = 1, max = 100, message = "Away team cannot be empty"))]
    pub away_team: String,
    /// Initial status.
    pub status: MatchStatus,
    /// Scheduled kick-off.
    pub start_time: DateTime<Utc>,
}

/// Mirrors `lower(btrim(home_team)) <> lower(btrim(away_team))`.
fn team_key(name: &str) -> String {
    name.trim_matches(' ').to_lowercase()
}

fn validate_distinct_teams(input: &CreateMatchInput) -> Result<(), ValidationError> {
    if team_key(&input.home_team) == team_key(&input.away_team) {
        return Err(ValidationError::new("distinct_teams")
            .with_message("Home and away teams must differ".into()));
    }
    Ok(())
}

/// Match repository for CRUD operations.
#[derive(Debug)]
pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    /// Creates a new match repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a match and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for bad input, `Internal` if the insert returned
    /// no row, and `Database` for driver failures.
    pub async fn create(&self, input: CreateMatchInput) -> AppResult<matches::Model> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let model = matches::ActiveModel {
            id: NotSet,
            sport: Set(input.sport),
            home_team: Set(input.home_team),
            away_team: Set(input.away_team),
            status: Set(input.status),
            start_time: Set(input.start_time.into()),
            end_time: Set(None),
            home_score: Set(0),
            away_score: Set(0),
            created_at: Set(Utc::now().into()),
        };

        // RETURNING with no row surfaces as RecordNotFound
        model.insert(self.db).await.map_err(|e| match e {
            DbErr::RecordNotInserted | DbErr::RecordNotFound(_) => {
                AppError::Internal("Failed to create match".to_string())
            }
            other => other.into(),
        })
    }

    /// Finds a match by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<matches::Model>> {
        Ok(matches::Entity::find_by_id(id).one(self.db).await?)
    }

    /// Sets the home score and status of a match, leaving every other column untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no match has this ID and `Validation` for a
    /// negative score.
    pub async fn update_score(
        &self,
        id: i32,
        home_score: i32,
        status: MatchStatus,
    ) -> AppResult<matches::Model> {
        if home_score < 0 {
            return Err(AppError::Validation(format!(
                "home score must be non-negative, got {home_score}"
            )));
        }

        matches::ActiveModel {
            id: Set(id),
            home_score: Set(home_score),
            status: Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => AppError::NotFound(format!("match {id}")),
            other => other.into(),
        })
    }

    /// Deletes a match. Returns the number of rows removed.
    ///
    /// Commentary for the match must be removed first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = matches::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn input(home: &str, away: &str) -> CreateMatchInput {
        CreateMatchInput {
            sport: "Soccer".to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            status: MatchStatus::Scheduled,
            start_time: Utc::now(),
        }
    }

    fn stored(id: i32, home_score: i32, status: MatchStatus) -> matches::Model {
        let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());
        matches::Model {
            id,
            sport: "Soccer".to_string(),
            home_team: "Team A".to_string(),
            away_team: "Team B".to_string(),
            status,
            start_time: now,
            end_time: None,
            home_score,
            away_score: 0,
            created_at: now,
        }
    }

    #[test]
    fn test_input_validation() {
        assert!(input("Team A", "Team B").validate().is_ok());
        assert!(input("", "Team B").validate().is_err());
        assert!(input("Team A", "").validate().is_err());
        assert!(input("Team A", " team a ").validate().is_err());

        let mut long = input("Team A", "Team B");
        long.sport = "x".repeat(101);
        assert!(long.validate().is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_querying() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = MatchRepository::new(&db);

        let err = repo.create(input("Team A", "Team A")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored(1, 0, MatchStatus::Scheduled)]])
            .into_connection();
        let repo = MatchRepository::new(&db);

        let created = repo.create(input("Team A", "Team B")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, MatchStatus::Scheduled);
        assert_eq!(created.home_score, 0);
    }

    #[tokio::test]
    async fn test_create_without_returned_row_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<matches::Model>::new()])
            .into_connection();
        let repo = MatchRepository::new(&db);

        let err = repo.create(input("Team A", "Team B")).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "Failed to create match"));
    }

    #[tokio::test]
    async fn test_update_score_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<matches::Model>::new()])
            .into_connection();
        let repo = MatchRepository::new(&db);

        let err = repo.update_score(42, 1, MatchStatus::Live).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "match 42"));
    }

    #[tokio::test]
    async fn test_update_score_rejects_negative_score() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = MatchRepository::new(&db);

        let err = repo.update_score(1, -1, MatchStatus::Live).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = MatchRepository::new(&db);

        assert_eq!(repo.delete(1).await.unwrap(), 1);
    }
}
