//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{BillRepository, PaymentMethodRepository, RepositoryProvider};

use super::bill_repository::SeaOrmBillRepository;
use super::payment_method_repository::SeaOrmPaymentMethodRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let bill = repos.bills().find_bill(&BillKey::new("CONN-1", 3, 2024)).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    bills: SeaOrmBillRepository,
    payment_methods: SeaOrmPaymentMethodRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            bills: SeaOrmBillRepository::new(db.clone()),
            payment_methods: SeaOrmPaymentMethodRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn bills(&self) -> &dyn BillRepository {
        &self.bills
    }

    fn payment_methods(&self) -> &dyn PaymentMethodRepository {
        &self.payment_methods
    }
}
