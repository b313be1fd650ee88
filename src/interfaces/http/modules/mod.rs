pub mod bills;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod request_id;
