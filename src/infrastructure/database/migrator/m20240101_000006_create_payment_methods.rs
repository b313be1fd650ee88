//! Create payment_methods table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentMethods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentMethods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PaymentMethods::Description)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Insert the default catalog
        let insert = Query::insert()
            .into_table(PaymentMethods::Table)
            .columns([PaymentMethods::Id, PaymentMethods::Description])
            .values_panic([1.into(), "Cash".into()])
            .values_panic([2.into(), "Debit/Credit card".into()])
            .values_panic([3.into(), "Bank transfer".into()])
            .values_panic([4.into(), "Mobile wallet".into()])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentMethods::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PaymentMethods {
    Table,
    Id,
    Description,
}
