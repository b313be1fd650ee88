//! Create bills table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bills::CustomerId).string().not_null())
                    .col(ColumnDef::new(Bills::ConnectionId).string().not_null())
                    .col(ColumnDef::new(Bills::Month).integer().not_null())
                    .col(ColumnDef::new(Bills::Year).integer().not_null())
                    .col(ColumnDef::new(Bills::CustomerName).string().not_null())
                    .col(ColumnDef::new(Bills::CustomerAddress).string().not_null())
                    .col(ColumnDef::new(Bills::CustomerPhone).string())
                    .col(ColumnDef::new(Bills::CustomerEmail).string())
                    .col(
                        ColumnDef::new(Bills::ConnectionType)
                            .string()
                            .not_null()
                            .default("Residential"),
                    )
                    .col(ColumnDef::new(Bills::Division).string().not_null())
                    .col(ColumnDef::new(Bills::Subdivision).string().not_null())
                    .col(ColumnDef::new(Bills::InstallationDate).date())
                    .col(ColumnDef::new(Bills::MeterType).string().not_null())
                    .col(ColumnDef::new(Bills::IssueDate).date().not_null())
                    .col(
                        ColumnDef::new(Bills::NetPeakUnits)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Bills::NetOffPeakUnits)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Bills::BillAmount).double().not_null())
                    .col(ColumnDef::new(Bills::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(Bills::ArrearsAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Bills::Status)
                            .string()
                            .not_null()
                            .default("Unpaid"),
                    )
                    .to_owned(),
            )
            .await?;

        // One bill per connection and month
        manager
            .create_index(
                Index::create()
                    .name("idx_bills_connection_period")
                    .table(Bills::Table)
                    .col(Bills::ConnectionId)
                    .col(Bills::Month)
                    .col(Bills::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Bill history lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_bills_customer_issue_date")
                    .table(Bills::Table)
                    .col(Bills::CustomerId)
                    .col(Bills::IssueDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bills {
    Table,
    Id,
    CustomerId,
    ConnectionId,
    Month,
    Year,
    CustomerName,
    CustomerAddress,
    CustomerPhone,
    CustomerEmail,
    ConnectionType,
    Division,
    Subdivision,
    InstallationDate,
    MeterType,
    IssueDate,
    NetPeakUnits,
    NetOffPeakUnits,
    BillAmount,
    DueDate,
    ArrearsAmount,
    Status,
}
