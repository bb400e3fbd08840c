use sea_orm::entity::prelude::*;

/// Seat ledger entry, at most one per (event, user) pair
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "barrio_registration")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub quantity: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::barrio_event::Entity",
        from = "Column::EventId",
        to = "super::barrio_event::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BarrioEvent,
    #[sea_orm(
        belongs_to = "super::barrio_user::Entity",
        from = "Column::UserId",
        to = "super::barrio_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BarrioUser,
}

impl Related<super::barrio_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioEvent.def()
    }
}

impl Related<super::barrio_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BarrioUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
