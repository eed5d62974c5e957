use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mentorship_focus_area")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mentorship_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub expertise_area_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mentorship::Entity",
        from = "Column::MentorshipId",
        to   = "super::mentorship::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mentorship,

    #[sea_orm(
        belongs_to = "super::expertise_area::Entity",
        from = "Column::ExpertiseAreaId",
        to   = "super::expertise_area::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ExpertiseArea,
}

impl Related<super::mentorship::Entity> for Entity {
    fn to() -> RelationDef { Relation::Mentorship.def() }
}

impl Related<super::expertise_area::Entity> for Entity {
    fn to() -> RelationDef { Relation::ExpertiseArea.def() }
}

impl ActiveModelBehavior for ActiveModel {}
