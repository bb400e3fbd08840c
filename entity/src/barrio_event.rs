use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "barrio_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: EventStatus,
    pub created_by: i32,
    pub address: String,
    pub locality: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    /// Total seats, 0 means unlimited
    pub capacity: i32,
    /// Price per seat in whole currency units, 0 means free
    pub price: i64,
    pub adults_only: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub status_changed_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::barrio_user::Entity",
        from = "Column::CreatedBy",
        to = "super::barrio_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BarrioUser,
    #[sea_orm(has_many = "super::barrio_registration::Entity")]
    BarrioRegistration,
}

impl Related<super::barrio_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioUser.def()
    }
}

impl Related<super::barrio_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
