//! Bill, payment and adjustment DTOs
//!
//! The request types are shared by the HTML forms and the JSON API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::BillQuery;
use crate::domain::{
    AdjustmentRequest, BillDetails, FixedFeeLine, PaymentReceipt, PaymentRequest, PriorBill,
    SubsidyLine, TariffLine, TaxLine,
};

// ── Requests ───────────────────────────────────────────────────

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

// Form bodies decode "NaN" and "inf" into f64, and range checks let NaN through.
fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite").with_message("must be a finite number".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BillRetrievalRequest {
    #[validate(
        length(min = 1, max = 64, message = "customer id is required"),
        custom(function = "not_blank")
    )]
    pub customer_id: String,
    #[validate(
        length(min = 1, max = 64, message = "connection id is required"),
        custom(function = "not_blank")
    )]
    pub connection_id: String,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: u32,
    #[validate(range(min = 1900, max = 2100, message = "year must be between 1900 and 2100"))]
    pub year: i32,
}

impl BillRetrievalRequest {
    pub fn to_query(&self) -> BillQuery {
        BillQuery::new(
            self.customer_id.trim(),
            self.connection_id.trim(),
            self.month,
            self.year,
        )
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PaymentRequestDto {
    #[validate(range(min = 1, message = "bill id must be positive"))]
    pub bill_id: i64,
    #[validate(range(min = 0.01, message = "amount must be positive"), custom(function = "finite"))]
    pub amount: f64,
    #[validate(range(min = 1, message = "payment method is required"))]
    pub payment_method_id: i32,
}

impl From<PaymentRequestDto> for PaymentRequest {
    fn from(dto: PaymentRequestDto) -> Self {
        Self {
            bill_id: dto.bill_id,
            amount: dto.amount,
            payment_method_id: dto.payment_method_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdjustmentRequestDto {
    #[validate(range(min = 1, message = "bill id must be positive"))]
    pub bill_id: i64,
    #[validate(
        length(min = 1, max = 100, message = "officer name is required"),
        custom(function = "not_blank")
    )]
    pub officer_name: String,
    #[validate(
        length(min = 1, max = 100, message = "officer designation is required"),
        custom(function = "not_blank")
    )]
    pub officer_designation: String,
    #[validate(
        range(min = 0.0, message = "original amount cannot be negative"),
        custom(function = "finite")
    )]
    pub original_bill_amount: f64,
    #[validate(custom(function = "finite"))]
    pub adjustment_amount: f64,
    #[validate(
        length(min = 1, max = 500, message = "a reason is required"),
        custom(function = "not_blank")
    )]
    pub adjustment_reason: String,
}

impl From<AdjustmentRequestDto> for AdjustmentRequest {
    fn from(dto: AdjustmentRequestDto) -> Self {
        Self {
            bill_id: dto.bill_id,
            officer_name: dto.officer_name,
            officer_designation: dto.officer_designation,
            original_bill_amount: dto.original_bill_amount,
            adjustment_amount: dto.adjustment_amount,
            adjustment_reason: dto.adjustment_reason,
        }
    }
}

// ── Responses ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct TariffLineDto {
    pub name: String,
    pub units: f64,
    pub rate: f64,
    pub amount: f64,
}

impl From<TariffLine> for TariffLineDto {
    fn from(t: TariffLine) -> Self {
        Self {
            name: t.name,
            units: t.units,
            rate: t.rate,
            amount: t.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AmountLineDto {
    pub name: String,
    pub amount: f64,
}

impl From<TaxLine> for AmountLineDto {
    fn from(t: TaxLine) -> Self {
        Self {
            name: t.name,
            amount: t.amount,
        }
    }
}

impl From<FixedFeeLine> for AmountLineDto {
    fn from(f: FixedFeeLine) -> Self {
        Self {
            name: f.name,
            amount: f.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubsidyLineDto {
    pub name: String,
    pub provider_name: String,
    pub rate_per_unit: f64,
}

impl From<SubsidyLine> for SubsidyLineDto {
    fn from(s: SubsidyLine) -> Self {
        Self {
            name: s.name,
            provider_name: s.provider_name,
            rate_per_unit: s.rate_per_unit,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PriorBillDto {
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
}

impl From<PriorBill> for PriorBillDto {
    fn from(p: PriorBill) -> Self {
        Self {
            month: p.month,
            year: p.year,
            amount: p.amount,
            issue_date: p.issue_date,
            due_date: p.due_date,
            status: p.status,
        }
    }
}

/// Assembled bill with line items and recent history
#[derive(Debug, Serialize, ToSchema)]
pub struct BillDetailsResponse {
    pub customer_id: String,
    pub connection_id: String,
    pub month: u32,
    pub year: i32,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
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
    pub amount_after_due_date: f64,
    pub arrears_amount: f64,
    pub fixed_fee_amount: f64,
    pub tax_amount: f64,
    pub tariffs: Vec<TariffLineDto>,
    pub taxes: Vec<AmountLineDto>,
    pub subsidies: Vec<SubsidyLineDto>,
    pub fixed_fees: Vec<AmountLineDto>,
    pub previous_bills: Vec<PriorBillDto>,
}

impl From<BillDetails> for BillDetailsResponse {
    fn from(d: BillDetails) -> Self {
        let amount_after_due_date = d.amount_after_due_date();
        let fixed_fee_amount = d.fixed_fee_amount();
        let tax_amount = d.tax_amount();
        let b = d.bill;
        Self {
            customer_id: d.customer_id,
            connection_id: b.connection_id,
            month: b.month,
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
            amount_after_due_date,
            arrears_amount: b.arrears_amount,
            fixed_fee_amount,
            tax_amount,
            tariffs: d.tariffs.into_iter().map(Into::into).collect(),
            taxes: d.taxes.into_iter().map(Into::into).collect(),
            subsidies: d.subsidies.into_iter().map(Into::into).collect(),
            fixed_fees: d.fixed_fees.into_iter().map(Into::into).collect(),
            previous_bills: d.previous_bills.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentReceiptResponse {
    pub bill_id: i64,
    pub amount: f64,
    pub payment_method_id: i32,
    pub payment_method_description: String,
    pub payment_date: DateTime<Utc>,
    pub payment_status: String,
    pub outstanding_amount: f64,
}

impl From<PaymentReceipt> for PaymentReceiptResponse {
    fn from(r: PaymentReceipt) -> Self {
        Self {
            bill_id: r.bill_id,
            amount: r.amount,
            payment_method_id: r.payment_method_id,
            payment_method_description: r.payment_method_description,
            payment_date: r.payment_date,
            payment_status: r.payment_status,
            outstanding_amount: r.outstanding_amount,
        }
    }
}
