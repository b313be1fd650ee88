//! In-memory repository fake for service tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    Bill, BillKey, BillRepository, DomainError, DomainResult, FixedFeeLine, PaymentMethod,
    PaymentMethodRepository, PriorBill, RepositoryProvider, SubsidyLine, TariffLine, TaxLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    Bill,
    Tariffs,
    Taxes,
    Subsidies,
    FixedFees,
    History,
    PaymentMethod,
}

#[derive(Default)]
pub(crate) struct FakeData {
    pub bill: Option<Bill>,
    pub tariffs: Vec<TariffLine>,
    pub taxes: Vec<TaxLine>,
    pub subsidies: Vec<SubsidyLine>,
    pub fixed_fees: Vec<FixedFeeLine>,
    pub history: Vec<Bill>,
    pub payment_methods: Vec<PaymentMethod>,
    pub fail_on: Option<Lookup>,
    pub calls: Vec<Lookup>,
    pub history_limit: Option<u64>,
}

#[derive(Default)]
pub(crate) struct FakeRepos {
    pub data: Mutex<FakeData>,
}

impl FakeRepos {
    pub fn calls(&self) -> Vec<Lookup> {
        self.data.lock().unwrap().calls.clone()
    }

    pub fn history_limit(&self) -> Option<u64> {
        self.data.lock().unwrap().history_limit
    }

    fn record(&self, lookup: Lookup) -> DomainResult<std::sync::MutexGuard<'_, FakeData>> {
        let mut data = self.data.lock().unwrap();
        data.calls.push(lookup);
        if data.fail_on == Some(lookup) {
            return Err(DomainError::Storage(format!("{:?} lookup failed", lookup)));
        }
        Ok(data)
    }
}

#[async_trait]
impl BillRepository for FakeRepos {
    async fn find_bill(&self, _key: &BillKey) -> DomainResult<Option<Bill>> {
        Ok(self.record(Lookup::Bill)?.bill.clone())
    }

    async fn find_tariff_lines(&self, _key: &BillKey) -> DomainResult<Vec<TariffLine>> {
        Ok(self.record(Lookup::Tariffs)?.tariffs.clone())
    }

    async fn find_tax_lines(&self, _key: &BillKey) -> DomainResult<Vec<TaxLine>> {
        Ok(self.record(Lookup::Taxes)?.taxes.clone())
    }

    async fn find_subsidy_lines(&self, _key: &BillKey) -> DomainResult<Vec<SubsidyLine>> {
        Ok(self.record(Lookup::Subsidies)?.subsidies.clone())
    }

    async fn find_fixed_fee_lines(&self, _key: &BillKey) -> DomainResult<Vec<FixedFeeLine>> {
        Ok(self.record(Lookup::FixedFees)?.fixed_fees.clone())
    }

    async fn find_prior_bills(
        &self,
        customer_id: &str,
        limit: u64,
    ) -> DomainResult<Vec<PriorBill>> {
        let mut data = self.record(Lookup::History)?;
        data.history_limit = Some(limit);
        let mut bills: Vec<&Bill> = data
            .history
            .iter()
            .filter(|b| b.customer_id == customer_id)
            .collect();
        bills.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(bills
            .into_iter()
            .take(limit as usize)
            .map(|b| PriorBill {
                month: b.month,
                year: b.year,
                amount: b.bill_amount,
                issue_date: b.issue_date,
                due_date: b.due_date,
                status: b.status.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl PaymentMethodRepository for FakeRepos {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>> {
        let data = self.record(Lookup::PaymentMethod)?;
        Ok(data.payment_methods.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        Ok(self.record(Lookup::PaymentMethod)?.payment_methods.clone())
    }
}

impl RepositoryProvider for FakeRepos {
    fn bills(&self) -> &dyn BillRepository {
        self
    }

    fn payment_methods(&self) -> &dyn PaymentMethodRepository {
        self
    }
}
