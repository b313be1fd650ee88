//! Bill domain entities

use chrono::NaiveDate;

/// How many prior bills the history section shows.
pub const PRIOR_BILL_LIMIT: u64 = 10;

/// Lookup key shared by a bill and all of its line items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BillKey {
    pub connection_id: String,
    pub month: u32,
    pub year: i32,
}

impl BillKey {
    pub fn new(connection_id: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            connection_id: connection_id.into(),
            month,
            year,
        }
    }
}

impl std::fmt::Display for BillKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}-{}", self.connection_id, self.month, self.year)
    }
}

/// Bill header for one connection and billing month
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub customer_id: String,
    pub connection_id: String,
    pub month: u32,
    pub year: i32,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    /// e.g. "Residential", "Commercial"
    pub connection_type: String,
    pub division: String,
    pub subdivision: String,
    pub installation_date: Option<NaiveDate>,
    pub meter_type: String,
    pub issue_date: NaiveDate,
    pub net_peak_units: f64,
    pub net_off_peak_units: f64,
    pub bill_amount: f64,
    pub due_date: NaiveDate,
    pub arrears_amount: f64,
    pub status: String,
}

impl Bill {
    pub fn key(&self) -> BillKey {
        BillKey::new(self.connection_id.clone(), self.month, self.year)
    }
}

/// Energy charge for one tariff slab
#[derive(Debug, Clone, PartialEq)]
pub struct TariffLine {
    pub name: String,
    pub units: f64,
    pub rate: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxLine {
    pub name: String,
    pub amount: f64,
}

/// Subsidy applied per unit by a provider (e.g. a government scheme)
#[derive(Debug, Clone, PartialEq)]
pub struct SubsidyLine {
    pub name: String,
    pub provider_name: String,
    pub rate_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedFeeLine {
    pub name: String,
    pub amount: f64,
}

/// Earlier bill of the same customer, shown in the history table
#[derive(Debug, Clone, PartialEq)]
pub struct PriorBill {
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
}

/// Everything the bill details page shows for one bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDetails {
    /// Customer id as submitted with the request
    pub customer_id: String,
    pub bill: Bill,
    pub tariffs: Vec<TariffLine>,
    pub taxes: Vec<TaxLine>,
    pub subsidies: Vec<SubsidyLine>,
    pub fixed_fees: Vec<FixedFeeLine>,
    pub previous_bills: Vec<PriorBill>,
}

impl BillDetails {
    /// Amount payable after the due date. No late surcharge is applied.
    pub fn amount_after_due_date(&self) -> f64 {
        self.bill.bill_amount
    }

    pub fn fixed_fee_amount(&self) -> f64 {
        self.fixed_fees.iter().map(|f| f.amount).sum()
    }

    pub fn tax_amount(&self) -> f64 {
        self.taxes.iter().map(|t| t.amount).sum()
    }

    pub fn tariff_amount(&self) -> f64 {
        self.tariffs.iter().map(|t| t.amount).sum()
    }
}
