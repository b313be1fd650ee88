//! Bill adjustment requests

/// Correction to a bill amount requested by a billing officer
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentRequest {
    pub bill_id: i64,
    pub officer_name: String,
    pub officer_designation: String,
    pub original_bill_amount: f64,
    pub adjustment_amount: f64,
    pub adjustment_reason: String,
}

impl AdjustmentRequest {
    /// Bill amount once the adjustment is applied.
    pub fn adjusted_amount(&self) -> f64 {
        self.original_bill_amount + self.adjustment_amount
    }
}
