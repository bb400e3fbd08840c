use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251201_000001_create_barrio_user_table::BarrioUser,
    m20251201_000002_create_barrio_event_table::BarrioEvent,
};

static IDX_REGISTRATION_USER_ID: &str = "idx_barrio_registration_user_id";
static FK_REGISTRATION_EVENT_ID: &str = "fk_barrio_registration_event_id";
static FK_REGISTRATION_USER_ID: &str = "fk_barrio_registration_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key doubles as the one-registration-per-user constraint.
        // Quantity 0 marks a claim released by a revision when no seats were left.
        manager
            .create_table(
                Table::create()
                    .table(BarrioRegistration::Table)
                    .if_not_exists()
                    .col(integer(BarrioRegistration::EventId))
                    .col(integer(BarrioRegistration::UserId))
                    .col(
                        integer(BarrioRegistration::Quantity)
                            .default(1)
                            .check(Expr::col(BarrioRegistration::Quantity).between(0, 5)),
                    )
                    .col(timestamp(BarrioRegistration::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(BarrioRegistration::EventId)
                            .col(BarrioRegistration::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_USER_ID)
                    .table(BarrioRegistration::Table)
                    .col(BarrioRegistration::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_EVENT_ID)
                    .from_tbl(BarrioRegistration::Table)
                    .from_col(BarrioRegistration::EventId)
                    .to_tbl(BarrioEvent::Table)
                    .to_col(BarrioEvent::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_USER_ID)
                    .from_tbl(BarrioRegistration::Table)
                    .from_col(BarrioRegistration::UserId)
                    .to_tbl(BarrioUser::Table)
                    .to_col(BarrioUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REGISTRATION_USER_ID)
                    .table(BarrioRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REGISTRATION_EVENT_ID)
                    .table(BarrioRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_USER_ID)
                    .table(BarrioRegistration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BarrioRegistration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BarrioRegistration {
    Table,
    EventId,
    UserId,
    Quantity,
    CreatedAt,
}
