use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_create_barrio_user_table::BarrioUser;

static IDX_EVENT_STATUS: &str = "idx_barrio_event_status";
static FK_EVENT_CREATED_BY: &str = "fk_barrio_event_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BarrioEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(BarrioEvent::Id))
                    .col(string_len(BarrioEvent::Title, 200))
                    .col(text(BarrioEvent::Description))
                    .col(string_len(BarrioEvent::Status, 20).default("pending"))
                    .col(integer(BarrioEvent::CreatedBy))
                    .col(string_len(BarrioEvent::Address, 255).default(""))
                    .col(string_len_null(BarrioEvent::Locality, 100))
                    .col(string_len_null(BarrioEvent::Venue, 150))
                    .col(date_null(BarrioEvent::StartDate))
                    .col(date_null(BarrioEvent::EndDate))
                    .col(time_null(BarrioEvent::StartTime))
                    .col(time_null(BarrioEvent::EndTime))
                    .col(
                        integer(BarrioEvent::Capacity)
                            .default(0)
                            .check(Expr::col(BarrioEvent::Capacity).gte(0)),
                    )
                    .col(
                        big_integer(BarrioEvent::Price)
                            .default(0)
                            .check(Expr::col(BarrioEvent::Price).gte(0)),
                    )
                    .col(boolean(BarrioEvent::AdultsOnly).default(false))
                    .col(timestamp(BarrioEvent::CreatedAt))
                    .col(timestamp(BarrioEvent::UpdatedAt))
                    .col(timestamp_null(BarrioEvent::StatusChangedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_STATUS)
                    .table(BarrioEvent::Table)
                    .col(BarrioEvent::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_CREATED_BY)
                    .from_tbl(BarrioEvent::Table)
                    .from_col(BarrioEvent::CreatedBy)
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
                    .name(FK_EVENT_CREATED_BY)
                    .table(BarrioEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_STATUS)
                    .table(BarrioEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BarrioEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BarrioEvent {
    Table,
    Id,
    Title,
    Description,
    Status,
    CreatedBy,
    Address,
    Locality,
    Venue,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    Capacity,
    Price,
    AdultsOnly,
    CreatedAt,
    UpdatedAt,
    StatusChangedAt,
}
