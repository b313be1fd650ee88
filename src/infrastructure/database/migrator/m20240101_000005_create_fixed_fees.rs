//! Create fixed_fees table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixedFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FixedFees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FixedFees::ConnectionId).string().not_null())
                    .col(ColumnDef::new(FixedFees::Month).integer().not_null())
                    .col(ColumnDef::new(FixedFees::Year).integer().not_null())
                    .col(ColumnDef::new(FixedFees::FeeName).string().not_null())
                    .col(ColumnDef::new(FixedFees::FeeAmount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fixed_fees_connection_period")
                    .table(FixedFees::Table)
                    .col(FixedFees::ConnectionId)
                    .col(FixedFees::Month)
                    .col(FixedFees::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixedFees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FixedFees {
    Table,
    Id,
    ConnectionId,
    Month,
    Year,
    FeeName,
    FeeAmount,
}
