//! Bill aggregate
//!
//! Bill header, its itemized charge lines and the customer's bill history.

pub mod model;
pub mod repository;

pub use model::{
    Bill, BillDetails, BillKey, FixedFeeLine, PriorBill, SubsidyLine, TariffLine, TaxLine,
    PRIOR_BILL_LIMIT,
};
pub use repository::BillRepository;

#[cfg(test)]
pub(crate) mod fixtures;
