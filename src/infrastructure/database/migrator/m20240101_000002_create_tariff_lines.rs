//! Create tariffs (bill tariff lines) table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tariffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tariffs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tariffs::ConnectionId).string().not_null())
                    .col(ColumnDef::new(Tariffs::Month).integer().not_null())
                    .col(ColumnDef::new(Tariffs::Year).integer().not_null())
                    .col(ColumnDef::new(Tariffs::TariffName).string().not_null())
                    .col(ColumnDef::new(Tariffs::Units).double().not_null())
                    .col(ColumnDef::new(Tariffs::Rate).double().not_null())
                    .col(ColumnDef::new(Tariffs::Amount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tariffs_connection_period")
                    .table(Tariffs::Table)
                    .col(Tariffs::ConnectionId)
                    .col(Tariffs::Month)
                    .col(Tariffs::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tariffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tariffs {
    Table,
    Id,
    ConnectionId,
    Month,
    Year,
    TariffName,
    Units,
    Rate,
    Amount,
}
