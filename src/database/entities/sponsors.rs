use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Simplified to String for now - allowed values in SPONSOR_STATUSES
pub type SponsorStatus = String;

pub const SPONSOR_STATUSES: [&str; 4] = ["pending", "approved", "rejected", "displayed"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "sponsors")]
#[serde(rename_all = "camelCase")]
#[schema(as = Sponsor)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub company: String,
    pub logo: Option<String>,
    pub participant: String,
    pub display_order: i32,
    pub status: SponsorStatus,
    pub displayed_at: Option<ChronoDateTimeUtc>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Events,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
