//! HTML page handlers
//!
//! GET renders a page or form; POST accepts the form submission and renders
//! the outcome.

pub mod handlers;

pub use handlers::*;
