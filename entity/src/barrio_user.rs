use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "barrio_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Used for age-gating adults-only events
    pub birth_date: Option<Date>,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::barrio_event::Entity")]
    BarrioEvent,
    #[sea_orm(has_many = "super::barrio_registration::Entity")]
    BarrioRegistration,
}

impl Related<super::barrio_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioEvent.def()
    }
}

impl Related<super::barrio_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
