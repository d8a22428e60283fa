//! Commentary repository for database operations.

use chrono::Utc;
use matchday_shared::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use validator::Validate;

use crate::entities::{commentary, sea_orm_active_enums::EventType};

/// Input for adding a commentary line to a match.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentaryInput {
    /// Match the line belongs to.
    pub match_id: i32,
    /// Minute of play.
    #[validate(range(min = 0, max = 200))]
    pub minute: i32,
    /// Commentary text.
    #[validate(length(min = 1, max = 1000, message = "Message cannot be empty"))]
    pub message: String,
    /// What happened.
    pub event_type: EventType,
}

/// Commentary repository for CRUD operations.
#[derive(Debug)]
pub struct CommentaryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentaryRepository<'a> {
    /// Creates a new commentary repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a commentary line and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for bad input and `Database` if the insert fails,
    /// including when the match does not exist.
    pub async fn create(&self, input: CreateCommentaryInput) -> AppResult<commentary::Model> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let model = commentary::ActiveModel {
            id: NotSet,
            match_id: Set(input.match_id),
            minute: Set(input.minute),
            message: Set(input.message),
            event_type: Set(input.event_type),
            created_at: Set(Utc::now().into()),
        };

        Ok(model.insert(self.db).await?)
    }

    /// Lists commentary for a match in minute order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_match(&self, match_id: i32) -> AppResult<Vec<commentary::Model>> {
        Ok(commentary::Entity::find()
            .filter(commentary::Column::MatchId.eq(match_id))
            .order_by_asc(commentary::Column::Minute)
            .order_by_asc(commentary::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Counts commentary lines for a match.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_for_match(&self, match_id: i32) -> AppResult<u64> {
        Ok(commentary::Entity::find()
            .filter(commentary::Column::MatchId.eq(match_id))
            .count(self.db)
            .await?)
    }

    /// Deletes every commentary line of a match. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_for_match(&self, match_id: i32) -> AppResult<u64> {
        let result = commentary::Entity::delete_many()
            .filter(commentary::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    fn input(minute: i32, message: &str) -> CreateCommentaryInput {
        CreateCommentaryInput {
            match_id: 1,
            minute,
            message: message.to_string(),
            event_type: EventType::Goal,
        }
    }

    #[rstest]
    #[case(0, "Kick-off", true)]
    #[case(10, "Goal for Team A!", true)]
    #[case(200, "Penalties", true)]
    #[case(-1, "Before kick-off", false)]
    #[case(201, "Too late", false)]
    #[case(10, "", false)]
    fn test_input_validation(#[case] minute: i32, #[case] message: &str, #[case] valid: bool) {
        assert_eq!(input(minute, message).validate().is_ok(), valid);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = CommentaryRepository::new(&db);

        let err = repo.create(input(-5, "nope")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_for_match_filters_on_match_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();
        let repo = CommentaryRepository::new(&db);

        assert_eq!(repo.delete_for_match(7).await.unwrap(), 3);

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "commentary" WHERE "commentary"."match_id" = $1"#,
                [7i32.into()]
            )]
        );
    }
}
