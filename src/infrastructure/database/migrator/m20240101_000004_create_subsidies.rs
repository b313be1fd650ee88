//! Create subsidies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subsidies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subsidies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subsidies::ConnectionId).string().not_null())
                    .col(ColumnDef::new(Subsidies::Month).integer().not_null())
                    .col(ColumnDef::new(Subsidies::Year).integer().not_null())
                    .col(ColumnDef::new(Subsidies::SubsidyName).string().not_null())
                    .col(ColumnDef::new(Subsidies::ProviderName).string().not_null())
                    .col(ColumnDef::new(Subsidies::RatePerUnit).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subsidies_connection_period")
                    .table(Subsidies::Table)
                    .col(Subsidies::ConnectionId)
                    .col(Subsidies::Month)
                    .col(Subsidies::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subsidies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Subsidies {
    Table,
    Id,
    ConnectionId,
    Month,
    Year,
    SubsidyName,
    ProviderName,
    RatePerUnit,
}
