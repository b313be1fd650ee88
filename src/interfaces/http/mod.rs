//! HTTP interface
//!
//! - `common`: response envelope and validating extractors
//! - `modules`: page, API, health and metrics handlers
//! - `views`: server-rendered HTML
//! - `router`: route table, middleware and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;
pub mod views;

pub use router::{create_router, ApiDoc, RouterDeps};
