//! Bill repository interface

use async_trait::async_trait;

use super::model::{Bill, BillKey, FixedFeeLine, PriorBill, SubsidyLine, TariffLine, TaxLine};
use crate::domain::DomainResult;

/// Read-only access to bills and their line items.
#[async_trait]
pub trait BillRepository: Send + Sync {
    async fn find_bill(&self, key: &BillKey) -> DomainResult<Option<Bill>>;
    async fn find_tariff_lines(&self, key: &BillKey) -> DomainResult<Vec<TariffLine>>;
    async fn find_tax_lines(&self, key: &BillKey) -> DomainResult<Vec<TaxLine>>;
    async fn find_subsidy_lines(&self, key: &BillKey) -> DomainResult<Vec<SubsidyLine>>;
    async fn find_fixed_fee_lines(&self, key: &BillKey) -> DomainResult<Vec<FixedFeeLine>>;
    /// Most recent bills of a customer, newest issue date first.
    async fn find_prior_bills(&self, customer_id: &str, limit: u64)
        -> DomainResult<Vec<PriorBill>>;
}
