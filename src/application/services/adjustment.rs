//! Bill adjustment service

use log::info;

use crate::domain::{AdjustmentRequest, DomainError, DomainResult};

/// Handles officer-initiated bill adjustments.
///
/// Adjustments are accepted for validation only; applying them is not
/// supported yet and always yields [`DomainError::NotImplemented`].
#[derive(Debug, Default)]
pub struct AdjustmentService;

impl AdjustmentService {
    pub fn new() -> Self {
        Self
    }

    pub async fn adjust(&self, request: AdjustmentRequest) -> DomainResult<()> {
        info!(
            "Adjustment of {:.2} requested for bill {} by {} ({}): {}",
            request.adjustment_amount,
            request.bill_id,
            request.officer_name,
            request.officer_designation,
            request.adjustment_reason
        );
        Err(DomainError::NotImplemented("bill adjustments"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn adjustments_are_not_implemented() {
        let err = AdjustmentService::new()
            .adjust(AdjustmentRequest {
                bill_id: 1,
                officer_name: "S. Ahmed".into(),
                officer_designation: "SDO".into(),
                original_bill_amount: 5400.0,
                adjustment_amount: -400.0,
                adjustment_reason: "Meter misread".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }
}
