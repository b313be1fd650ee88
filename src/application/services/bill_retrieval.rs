//! Bill retrieval service
//!
//! Assembles the bill details shown to a customer: the bill header, its four
//! line-item sets and the customer's recent bill history.

use std::sync::Arc;

use log::{error, info};

use crate::domain::{BillDetails, BillKey, DomainResult, RepositoryProvider, PRIOR_BILL_LIMIT};

/// A customer's request for one monthly bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillQuery {
    pub customer_id: String,
    pub key: BillKey,
}

impl BillQuery {
    pub fn new(
        customer_id: impl Into<String>,
        connection_id: impl Into<String>,
        month: u32,
        year: i32,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            key: BillKey::new(connection_id, month, year),
        }
    }
}

pub struct BillRetrievalService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillRetrievalService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Retrieve a bill with all of its details.
    ///
    /// Returns `Ok(None)` when no bill exists for the connection and period;
    /// in that case no further lookups are made. Any storage error aborts
    /// the whole retrieval, so callers never see a partial result.
    pub async fn retrieve(&self, query: &BillQuery) -> DomainResult<Option<BillDetails>> {
        let result = self.assemble(query).await;

        let outcome = match &result {
            Ok(Some(_)) => "found",
            Ok(None) => "not_found",
            Err(_) => "error",
        };
        metrics::counter!("bill_lookups_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(Some(details)) => info!(
                "Bill {} retrieved for customer {}: {} tariff, {} tax, {} subsidy, {} fee lines, {} prior bills",
                query.key,
                query.customer_id,
                details.tariffs.len(),
                details.taxes.len(),
                details.subsidies.len(),
                details.fixed_fees.len(),
                details.previous_bills.len()
            ),
            Ok(None) => info!("No bill found for {}", query.key),
            Err(e) => error!("Bill retrieval for {} failed: {}", query.key, e),
        }

        result
    }

    async fn assemble(&self, query: &BillQuery) -> DomainResult<Option<BillDetails>> {
        let bills = self.repos.bills();

        let Some(bill) = bills.find_bill(&query.key).await? else {
            return Ok(None);
        };

        let tariffs = bills.find_tariff_lines(&query.key).await?;
        let taxes = bills.find_tax_lines(&query.key).await?;
        let subsidies = bills.find_subsidy_lines(&query.key).await?;
        let fixed_fees = bills.find_fixed_fee_lines(&query.key).await?;
        let previous_bills = bills
            .find_prior_bills(&query.customer_id, PRIOR_BILL_LIMIT)
            .await?;

        Ok(Some(BillDetails {
            customer_id: query.customer_id.clone(),
            bill,
            tariffs,
            taxes,
            subsidies,
            fixed_fees,
            previous_bills,
        }))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::{FakeRepos, Lookup};
    use crate::domain::bill::fixtures::{bill_for_month, sample_bill};
    use crate::domain::{FixedFeeLine, SubsidyLine, TariffLine, TaxLine};

    fn query() -> BillQuery {
        BillQuery::new("CUST-1", "CONN-1", 3, 2024)
    }

    fn populated() -> FakeRepos {
        let repos = FakeRepos::default();
        {
            let mut data = repos.data.lock().unwrap();
            data.bill = Some(sample_bill());
            data.tariffs = vec![TariffLine {
                name: "Peak".into(),
                units: 120.0,
                rate: 30.0,
                amount: 3600.0,
            }];
            data.taxes = vec![TaxLine { name: "GST".into(), amount: 150.0 }];
            data.subsidies = vec![SubsidyLine {
                name: "Lifeline".into(),
                provider_name: "Federal Govt".into(),
                rate_per_unit: 2.5,
            }];
            data.fixed_fees = vec![FixedFeeLine { name: "Meter rent".into(), amount: 50.0 }];
            data.history = (1..=12)
                .rev()
                .map(|m| bill_for_month(m, 2023, 1000.0))
                .collect();
        }
        repos
    }

    #[tokio::test]
    async fn missing_bill_stops_after_header_lookup() {
        let repos = Arc::new(FakeRepos::default());
        let service = BillRetrievalService::new(repos.clone());

        let result = service.retrieve(&query()).await.unwrap();

        assert!(result.is_none());
        assert_eq!(repos.calls(), vec![Lookup::Bill]);
    }

    #[tokio::test]
    async fn found_bill_collects_every_section() {
        let repos = Arc::new(populated());
        let service = BillRetrievalService::new(repos.clone());

        let details = service.retrieve(&query()).await.unwrap().unwrap();

        assert_eq!(details.customer_id, "CUST-1");
        assert_eq!(details.bill, sample_bill());
        assert_eq!(details.tariffs.len(), 1);
        assert_eq!(details.taxes, vec![TaxLine { name: "GST".into(), amount: 150.0 }]);
        assert_eq!(details.subsidies.len(), 1);
        assert_eq!(details.fixed_fee_amount(), 50.0);
        assert_eq!(
            repos.calls(),
            vec![
                Lookup::Bill,
                Lookup::Tariffs,
                Lookup::Taxes,
                Lookup::Subsidies,
                Lookup::FixedFees,
                Lookup::History,
            ]
        );
    }

    #[tokio::test]
    async fn history_is_capped_at_ten() {
        let repos = Arc::new(populated());
        let service = BillRetrievalService::new(repos.clone());

        let details = service.retrieve(&query()).await.unwrap().unwrap();

        assert_eq!(details.previous_bills.len(), 10);
        assert_eq!(details.previous_bills[0].month, 12);
        assert_eq!(repos.history_limit(), Some(PRIOR_BILL_LIMIT));
    }

    #[tokio::test]
    async fn storage_failure_in_any_lookup_is_an_error() {
        for failing in [
            Lookup::Bill,
            Lookup::Tariffs,
            Lookup::Taxes,
            Lookup::Subsidies,
            Lookup::FixedFees,
            Lookup::History,
        ] {
            let repos = populated();
            repos.data.lock().unwrap().fail_on = Some(failing);
            let service = BillRetrievalService::new(Arc::new(repos));

            let err = service.retrieve(&query()).await.unwrap_err();
            assert!(err.is_storage(), "{:?} failure should surface as storage error", failing);
        }
    }
}
