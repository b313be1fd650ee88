//! Payment domain entities

use chrono::{DateTime, Utc};

/// Status reported on every receipt. Payments are accepted in full.
pub const STATUS_FULLY_PAID: &str = "Fully paid";

/// Description shown when the payment method id has no catalog entry.
pub const UNKNOWN_PAYMENT_METHOD: &str = "Unknown payment method";

/// Payment method catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: i32,
    pub description: String,
}

/// A payment submitted against a bill
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub bill_id: i64,
    pub amount: f64,
    pub payment_method_id: i32,
}

/// Confirmation shown to the customer after paying
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub bill_id: i64,
    pub amount: f64,
    pub payment_method_id: i32,
    pub payment_method_description: String,
    pub payment_date: DateTime<Utc>,
    pub payment_status: String,
    pub outstanding_amount: f64,
}

impl PaymentReceipt {
    /// Build a receipt for a payment that settles the bill in full.
    pub fn fully_paid(
        request: &PaymentRequest,
        method: Option<PaymentMethod>,
        payment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            bill_id: request.bill_id,
            amount: request.amount,
            payment_method_id: request.payment_method_id,
            payment_method_description: method
                .map(|m| m.description)
                .unwrap_or_else(|| UNKNOWN_PAYMENT_METHOD.to_string()),
            payment_date,
            payment_status: STATUS_FULLY_PAID.to_string(),
            outstanding_amount: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PaymentRequest {
        PaymentRequest {
            bill_id: 42,
            amount: 5400.0,
            payment_method_id: 2,
        }
    }

    #[test]
    fn receipt_uses_method_description() {
        let now = Utc::now();
        let receipt = PaymentReceipt::fully_paid(
            &request(),
            Some(PaymentMethod {
                id: 2,
                description: "Debit/Credit card".into(),
            }),
            now,
        );
        assert_eq!(receipt.bill_id, 42);
        assert_eq!(receipt.payment_method_description, "Debit/Credit card");
        assert_eq!(receipt.payment_status, STATUS_FULLY_PAID);
        assert_eq!(receipt.outstanding_amount, 0.0);
        assert_eq!(receipt.payment_date, now);
    }

    #[test]
    fn receipt_falls_back_for_unknown_method() {
        let receipt = PaymentReceipt::fully_paid(&request(), None, Utc::now());
        assert_eq!(receipt.payment_method_description, UNKNOWN_PAYMENT_METHOD);
    }
}
