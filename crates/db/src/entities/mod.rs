//! `SeaORM` entity definitions.

pub mod commentary;
pub mod matches;
pub mod sea_orm_active_enums;
