//! Initial schema: matches and their commentary lines.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SCHEMA_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS commentary; DROP TABLE IF EXISTS matches;",
        )
        .await?;
        Ok(())
    }
}

const SCHEMA_SQL: &str = r"
CREATE TABLE matches (
    id SERIAL PRIMARY KEY,
    sport TEXT NOT NULL,
    home_team TEXT NOT NULL,
    away_team TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'scheduled',
    start_time TIMESTAMPTZ NOT NULL,
    end_time TIMESTAMPTZ,
    home_score INTEGER NOT NULL DEFAULT 0,
    away_score INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_matches_status CHECK (status IN ('scheduled', 'live', 'finished')),
    CONSTRAINT chk_matches_scores CHECK (home_score >= 0 AND away_score >= 0),
    CONSTRAINT chk_matches_teams CHECK (lower(btrim(home_team)) <> lower(btrim(away_team)))
);

CREATE TABLE commentary (
    id SERIAL PRIMARY KEY,
    match_id INTEGER NOT NULL REFERENCES matches(id),
    minute INTEGER NOT NULL,
    message TEXT NOT NULL,
    event_type TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_commentary_minute CHECK (minute >= 0),
    CONSTRAINT chk_commentary_event_type CHECK (
        event_type IN ('goal', 'card', 'substitution', 'foul', 'kickoff', 'full_time', 'note')
    )
);

-- Commentary is read per match in minute order
CREATE INDEX idx_commentary_match_minute ON commentary(match_id, minute);
";
