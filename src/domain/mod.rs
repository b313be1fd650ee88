pub mod adjustment;
pub mod bill;
pub mod payment;
pub mod repositories;

// Re-export commonly used types
pub use adjustment::AdjustmentRequest;
pub use bill::{
    Bill, BillDetails, BillKey, BillRepository, FixedFeeLine, PriorBill, SubsidyLine, TariffLine,
    TaxLine, PRIOR_BILL_LIMIT,
};
pub use payment::{PaymentMethod, PaymentMethodRepository, PaymentReceipt, PaymentRequest};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
