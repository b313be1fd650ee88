//! Application layer: use cases over the domain repositories

pub mod services;

pub use services::{AdjustmentService, BillQuery, BillRetrievalService, PaymentService};
