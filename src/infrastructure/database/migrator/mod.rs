//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_bills;
mod m20240101_000002_create_tariff_lines;
mod m20240101_000003_create_taxes;
mod m20240101_000004_create_subsidies;
mod m20240101_000005_create_fixed_fees;
mod m20240101_000006_create_payment_methods;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_bills::Migration),
            Box::new(m20240101_000002_create_tariff_lines::Migration),
            Box::new(m20240101_000003_create_taxes::Migration),
            Box::new(m20240101_000004_create_subsidies::Migration),
            Box::new(m20240101_000005_create_fixed_fees::Migration),
            Box::new(m20240101_000006_create_payment_methods::Migration),
        ]
    }
}
