use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Simplified to String for now - allowed values in EVENT_STATUSES
pub type EventStatus = String;

pub const EVENT_STATUSES: [&str; 5] = ["draft", "published", "ongoing", "completed", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "events")]
#[serde(rename_all = "camelCase")]
#[schema(as = Event)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: ChronoDateTimeUtc,
    pub location: String,
    pub producer: Option<String>,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub status: EventStatus,
    pub banner: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sponsors::Entity")]
    Sponsors,
}

impl Related<super::sponsors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sponsors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
