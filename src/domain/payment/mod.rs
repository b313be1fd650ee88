//! Payment aggregate
//!
//! Payment requests, receipts and the payment method catalog.

pub mod model;
pub mod repository;

pub use model::{
    PaymentMethod, PaymentReceipt, PaymentRequest, STATUS_FULLY_PAID, UNKNOWN_PAYMENT_METHOD,
};
pub use repository::PaymentMethodRepository;
