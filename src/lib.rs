//! # Utility Billing
//!
//! Web service for retrieving, paying and adjusting monthly utility bills.
//!
//! ## Architecture
//!
//! - **domain**: bill, payment and adjustment records and repository traits
//! - **application**: bill assembly, payment receipts, adjustments
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum router with HTML pages, JSON API and Swagger UI
//! - **server**: process lifecycle and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_router;
