//! Bill payment service

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use crate::domain::{
    DomainError, DomainResult, PaymentMethod, PaymentReceipt, PaymentRequest, RepositoryProvider,
};

/// Produces payment receipts.
///
/// Payments are not persisted: every accepted payment is reported as settling
/// the bill in full.
pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Payment methods offered on the payment form.
    pub async fn payment_methods(&self) -> DomainResult<Vec<PaymentMethod>> {
        self.repos.payment_methods().find_all().await
    }

    pub async fn pay(&self, request: PaymentRequest) -> DomainResult<PaymentReceipt> {
        if !(request.amount.is_finite() && request.amount > 0.0) {
            return Err(DomainError::Validation(
                "payment amount must be positive".to_string(),
            ));
        }

        let method = self
            .repos
            .payment_methods()
            .find_by_id(request.payment_method_id)
            .await?;
        if method.is_none() {
            warn!(
                "Payment for bill {} uses unknown payment method {}",
                request.bill_id, request.payment_method_id
            );
        }

        let receipt = PaymentReceipt::fully_paid(&request, method, Utc::now());
        info!(
            "Payment of {:.2} accepted for bill {} via {}",
            receipt.amount, receipt.bill_id, receipt.payment_method_description
        );
        Ok(receipt)
    }
}
