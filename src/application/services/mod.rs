//! Application services

mod adjustment;
mod bill_retrieval;
mod payment;

#[cfg(test)]
pub(crate) mod testing;

pub use adjustment::AdjustmentService;
pub use bill_retrieval::{BillQuery, BillRetrievalService};
pub use payment::PaymentService;
