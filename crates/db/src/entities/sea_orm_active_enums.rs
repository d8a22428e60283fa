//! Text-backed enums shared by the entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Not started yet.
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    /// In play.
    #[sea_orm(string_value = "live")]
    Live,
    /// Final whistle blown.
    #[sea_orm(string_value = "finished")]
    Finished,
}

/// Kind of event a commentary line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A goal was scored.
    #[sea_orm(string_value = "goal")]
    Goal,
    /// A yellow or red card.
    #[sea_orm(string_value = "card")]
    Card,
    /// A player substitution.
    #[sea_orm(string_value = "substitution")]
    Substitution,
    /// A foul.
    #[sea_orm(string_value = "foul")]
    Foul,
    /// Start of play.
    #[sea_orm(string_value = "kickoff")]
    Kickoff,
    /// End of play.
    #[sea_orm(string_value = "full_time")]
    FullTime,
    /// Free-form note.
    #[sea_orm(string_value = "note")]
    Note,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn test_status_string_values() {
        assert_eq!(MatchStatus::Scheduled.to_value(), "scheduled");
        assert_eq!(MatchStatus::Live.to_value(), "live");
        assert_eq!(
            MatchStatus::try_from_value(&"finished".to_string()).unwrap(),
            MatchStatus::Finished
        );
        assert!(MatchStatus::try_from_value(&"paused".to_string()).is_err());
    }

    #[test]
    fn test_event_type_string_values() {
        assert_eq!(EventType::Goal.to_value(), "goal");
        assert_eq!(EventType::FullTime.to_value(), "full_time");
        assert_eq!(EventType::iter().count(), 7);
    }
}
