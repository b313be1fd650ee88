//! Create taxes table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Taxes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Taxes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Taxes::ConnectionId).string().not_null())
                    .col(ColumnDef::new(Taxes::Month).integer().not_null())
                    .col(ColumnDef::new(Taxes::Year).integer().not_null())
                    .col(ColumnDef::new(Taxes::TaxName).string().not_null())
                    .col(ColumnDef::new(Taxes::TaxAmount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_taxes_connection_period")
                    .table(Taxes::Table)
                    .col(Taxes::ConnectionId)
                    .col(Taxes::Month)
                    .col(Taxes::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Taxes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Taxes {
    Table,
    Id,
    ConnectionId,
    Month,
    Year,
    TaxName,
    TaxAmount,
}
