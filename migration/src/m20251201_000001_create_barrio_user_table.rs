use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BarrioUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BarrioUser::Id))
                    .col(string_uniq(BarrioUser::Username))
                    .col(string(BarrioUser::Email))
                    .col(string_len(BarrioUser::Role, 20).default("resident"))
                    .col(date_null(BarrioUser::BirthDate))
                    .col(boolean(BarrioUser::IsActive).default(true))
                    .col(timestamp(BarrioUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BarrioUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BarrioUser {
    Table,
    Id,
    Username,
    Email,
    Role,
    BirthDate,
    IsActive,
    CreatedAt,
}
