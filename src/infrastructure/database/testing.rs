//! In-memory SQLite database and seed helpers for tests

use std::time::Duration;

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use super::entities::{bill, fixed_fee_line, subsidy_line, tariff_line, tax_line};
use super::migrator::Migrator;
use crate::domain::{Bill, BillKey};

/// Fresh migrated in-memory database.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub(crate) async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(3600))
        .sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub(crate) async fn insert_bill(db: &DatabaseConnection, b: &Bill) {
    bill::ActiveModel {
        id: NotSet,
        customer_id: Set(b.customer_id.clone()),
        connection_id: Set(b.connection_id.clone()),
        month: Set(b.month as i32),
        year: Set(b.year),
        customer_name: Set(b.customer_name.clone()),
        customer_address: Set(b.customer_address.clone()),
        customer_phone: Set(b.customer_phone.clone()),
        customer_email: Set(b.customer_email.clone()),
        connection_type: Set(b.connection_type.clone()),
        division: Set(b.division.clone()),
        subdivision: Set(b.subdivision.clone()),
        installation_date: Set(b.installation_date),
        meter_type: Set(b.meter_type.clone()),
        issue_date: Set(b.issue_date),
        net_peak_units: Set(b.net_peak_units),
        net_off_peak_units: Set(b.net_off_peak_units),
        bill_amount: Set(b.bill_amount),
        due_date: Set(b.due_date),
        arrears_amount: Set(b.arrears_amount),
        status: Set(b.status.clone()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub(crate) async fn insert_tariff(
    db: &DatabaseConnection,
    key: &BillKey,
    name: &str,
    units: f64,
    rate: f64,
) {
    tariff_line::ActiveModel {
        id: NotSet,
        connection_id: Set(key.connection_id.clone()),
        month: Set(key.month as i32),
        year: Set(key.year),
        tariff_name: Set(name.to_string()),
        units: Set(units),
        rate: Set(rate),
        amount: Set(units * rate),
    }
    .insert(db)
    .await
    .unwrap();
}

pub(crate) async fn insert_tax(db: &DatabaseConnection, key: &BillKey, name: &str, amount: f64) {
    tax_line::ActiveModel {
        id: NotSet,
        connection_id: Set(key.connection_id.clone()),
        month: Set(key.month as i32),
        year: Set(key.year),
        tax_name: Set(name.to_string()),
        tax_amount: Set(amount),
    }
    .insert(db)
    .await
    .unwrap();
}

pub(crate) async fn insert_subsidy(
    db: &DatabaseConnection,
    key: &BillKey,
    name: &str,
    provider: &str,
    rate_per_unit: f64,
) {
    subsidy_line::ActiveModel {
        id: NotSet,
        connection_id: Set(key.connection_id.clone()),
        month: Set(key.month as i32),
        year: Set(key.year),
        subsidy_name: Set(name.to_string()),
        provider_name: Set(provider.to_string()),
        rate_per_unit: Set(rate_per_unit),
    }
    .insert(db)
    .await
    .unwrap();
}

pub(crate) async fn insert_fixed_fee(
    db: &DatabaseConnection,
    key: &BillKey,
    name: &str,
    amount: f64,
) {
    fixed_fee_line::ActiveModel {
        id: NotSet,
        connection_id: Set(key.connection_id.clone()),
        month: Set(key.month as i32),
        year: Set(key.year),
        fee_name: Set(name.to_string()),
        fee_amount: Set(amount),
    }
    .insert(db)
    .await
    .unwrap();
}
