//! SeaORM implementation of BillRepository

use async_trait::async_trait;
use log::{debug, warn};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::domain::{
    Bill, BillKey, BillRepository, DomainError, DomainResult, FixedFeeLine, PriorBill,
    SubsidyLine, TariffLine, TaxLine,
};
use crate::infrastructure::database::entities::{
    bill, fixed_fee_line, subsidy_line, tariff_line, tax_line,
};

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Stored months are passed through unchanged so a bad row stays visible.
/// Only negative values, which `u32` cannot hold, collapse to 0.
fn month_from_db(month: i32) -> u32 {
    if !(1..=12).contains(&month) {
        warn!("Bill row has out-of-range month {}", month);
    }
    u32::try_from(month).unwrap_or(0)
}

fn bill_to_domain(b: bill::Model) -> Bill {
    Bill {
        customer_id: b.customer_id,
        connection_id: b.connection_id,
        month: month_from_db(b.month),
        year: b.year,
        customer_name: b.customer_name,
        customer_address: b.customer_address,
        customer_phone: b.customer_phone,
        customer_email: b.customer_email,
        connection_type: b.connection_type,
        division: b.division,
        subdivision: b.subdivision,
        installation_date: b.installation_date,
        meter_type: b.meter_type,
        issue_date: b.issue_date,
        net_peak_units: b.net_peak_units,
        net_off_peak_units: b.net_off_peak_units,
        bill_amount: b.bill_amount,
        due_date: b.due_date,
        arrears_amount: b.arrears_amount,
        status: b.status,
    }
}

fn bill_to_prior(b: bill::Model) -> PriorBill {
    PriorBill {
        month: month_from_db(b.month),
        year: b.year,
        amount: b.bill_amount,
        issue_date: b.issue_date,
        due_date: b.due_date,
        status: b.status,
    }
}

/// Restrict a line-item query to one connection and billing month.
macro_rules! scoped {
    ($entity:ident, $key:expr) => {
        $entity::Entity::find()
            .filter($entity::Column::ConnectionId.eq($key.connection_id.as_str()))
            .filter($entity::Column::Month.eq($key.month as i32))
            .filter($entity::Column::Year.eq($key.year))
            .order_by_asc($entity::Column::Id)
    };
}

// ── SeaOrmBillRepository ────────────────────────────────────────

pub struct SeaOrmBillRepository {
    db: DatabaseConnection,
}

impl SeaOrmBillRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_all<E: EntityTrait>(&self, query: Select<E>) -> DomainResult<Vec<E::Model>> {
        query.all(&self.db).await.map_err(db_err)
    }
}

#[async_trait]
impl BillRepository for SeaOrmBillRepository {
    async fn find_bill(&self, key: &BillKey) -> DomainResult<Option<Bill>> {
        let model = bill::Entity::find()
            .filter(bill::Column::ConnectionId.eq(key.connection_id.as_str()))
            .filter(bill::Column::Month.eq(key.month as i32))
            .filter(bill::Column::Year.eq(key.year))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        debug!("Bill lookup {}: found={}", key, model.is_some());
        Ok(model.map(bill_to_domain))
    }

    async fn find_tariff_lines(&self, key: &BillKey) -> DomainResult<Vec<TariffLine>> {
        let rows = self.fetch_all(scoped!(tariff_line, key)).await?;
        Ok(rows
            .into_iter()
            .map(|r| TariffLine {
                name: r.tariff_name,
                units: r.units,
                rate: r.rate,
                amount: r.amount,
            })
            .collect())
    }

    async fn find_tax_lines(&self, key: &BillKey) -> DomainResult<Vec<TaxLine>> {
        let rows = self.fetch_all(scoped!(tax_line, key)).await?;
        Ok(rows
            .into_iter()
            .map(|r| TaxLine {
                name: r.tax_name,
                amount: r.tax_amount,
            })
            .collect())
    }

    async fn find_subsidy_lines(&self, key: &BillKey) -> DomainResult<Vec<SubsidyLine>> {
        let rows = self.fetch_all(scoped!(subsidy_line, key)).await?;
        Ok(rows
            .into_iter()
            .map(|r| SubsidyLine {
                name: r.subsidy_name,
                provider_name: r.provider_name,
                rate_per_unit: r.rate_per_unit,
            })
            .collect())
    }

    async fn find_fixed_fee_lines(&self, key: &BillKey) -> DomainResult<Vec<FixedFeeLine>> {
        let rows = self.fetch_all(scoped!(fixed_fee_line, key)).await?;
        Ok(rows
            .into_iter()
            .map(|r| FixedFeeLine {
                name: r.fee_name,
                amount: r.fee_amount,
            })
            .collect())
    }

    async fn find_prior_bills(
        &self,
        customer_id: &str,
        limit: u64,
    ) -> DomainResult<Vec<PriorBill>> {
        let rows = bill::Entity::find()
            .filter(bill::Column::CustomerId.eq(customer_id))
            .order_by_desc(bill::Column::IssueDate)
            .order_by_desc(bill::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(bill_to_prior).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::fixtures::{bill_for_month, sample_bill};
    use crate::infrastructure::database::testing::*;

    fn key() -> BillKey {
        BillKey::new("CONN-1", 3, 2024)
    }

    #[test]
    fn stored_month_is_not_rewritten() {
        assert_eq!(month_from_db(3), 3);
        assert_eq!(month_from_db(15), 15);
        assert_eq!(month_from_db(0), 0);
        assert_eq!(month_from_db(-1), 0);
    }

    #[tokio::test]
    async fn missing_bill_is_none() {
        let db = memory_db().await;
        let repo = SeaOrmBillRepository::new(db);
        assert!(repo.find_bill(&key()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finds_bill_by_connection_and_period() {
        let db = memory_db().await;
        insert_bill(&db, &sample_bill()).await;
        insert_bill(&db, &bill_for_month(2, 2024, 4100.0)).await;

        let repo = SeaOrmBillRepository::new(db);
        let found = repo.find_bill(&key()).await.unwrap().unwrap();
        assert_eq!(found, sample_bill());

        let other_year = BillKey::new("CONN-1", 3, 2023);
        assert!(repo.find_bill(&other_year).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn line_items_are_scoped_to_key() {
        let db = memory_db().await;
        let k = key();
        let february = BillKey::new("CONN-1", 2, 2024);
        let neighbour = BillKey::new("CONN-2", 3, 2024);

        insert_tariff(&db, &k, "Peak", 120.0, 30.0).await;
        insert_tariff(&db, &k, "Off-peak", 80.0, 20.0).await;
        insert_tariff(&db, &february, "Peak", 90.0, 30.0).await;
        insert_tax(&db, &k, "GST", 150.0).await;
        insert_tax(&db, &neighbour, "GST", 99.0).await;
        insert_subsidy(&db, &k, "Lifeline", "Federal Govt", 2.5).await;
        insert_fixed_fee(&db, &k, "Meter rent", 50.0).await;
        insert_fixed_fee(&db, &february, "Meter rent", 50.0).await;

        let repo = SeaOrmBillRepository::new(db);

        let tariffs = repo.find_tariff_lines(&k).await.unwrap();
        assert_eq!(
            tariffs,
            vec![
                TariffLine { name: "Peak".into(), units: 120.0, rate: 30.0, amount: 3600.0 },
                TariffLine { name: "Off-peak".into(), units: 80.0, rate: 20.0, amount: 1600.0 },
            ]
        );
        assert_eq!(
            repo.find_tax_lines(&k).await.unwrap(),
            vec![TaxLine { name: "GST".into(), amount: 150.0 }]
        );
        assert_eq!(
            repo.find_subsidy_lines(&k).await.unwrap(),
            vec![SubsidyLine {
                name: "Lifeline".into(),
                provider_name: "Federal Govt".into(),
                rate_per_unit: 2.5,
            }]
        );
        assert_eq!(repo.find_fixed_fee_lines(&k).await.unwrap().len(), 1);
        assert!(repo.find_subsidy_lines(&neighbour).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn prior_bills_newest_first_and_limited() {
        let db = memory_db().await;
        // Twelve months of 2023 plus the sample bill for March 2024
        for month in 1..=12 {
            insert_bill(&db, &bill_for_month(month, 2023, 1000.0 + month as f64)).await;
        }
        insert_bill(&db, &sample_bill()).await;

        let repo = SeaOrmBillRepository::new(db);
        let history = repo.find_prior_bills("CUST-1", 10).await.unwrap();

        assert_eq!(history.len(), 10);
        assert_eq!((history[0].month, history[0].year), (3, 2024));
        assert_eq!((history[1].month, history[1].year), (12, 2023));
        assert_eq!((history[9].month, history[9].year), (4, 2023));
        assert!(history
            .windows(2)
            .all(|w| w[0].issue_date >= w[1].issue_date));
    }

    #[tokio::test]
    async fn prior_bills_returns_all_when_fewer_than_limit() {
        let db = memory_db().await;
        insert_bill(&db, &bill_for_month(1, 2024, 900.0)).await;
        insert_bill(&db, &bill_for_month(2, 2024, 950.0)).await;

        let repo = SeaOrmBillRepository::new(db);
        let history = repo.find_prior_bills("CUST-1", 10).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].amount, 950.0);
        assert_eq!(history[0].status, "Paid");

        assert!(repo.find_prior_bills("CUST-404", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn closed_connection_is_storage_error() {
        let db = memory_db().await;
        let repo = SeaOrmBillRepository::new(db.clone());
        db.close().await.unwrap();

        let err = repo.find_bill(&key()).await.unwrap_err();
        assert!(err.is_storage());
    }
}
