//! `SeaORM` Entity for matches table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::MatchStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub status: MatchStatus,
    pub start_time: DateTimeWithTimeZone,
    pub end_time: Option<DateTimeWithTimeZone>,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commentary::Entity")]
    Commentary,
}

impl Related<super::commentary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commentary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
