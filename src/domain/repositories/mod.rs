//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::bill::BillRepository;
use super::payment::PaymentMethodRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let bill = repos.bills().find_bill(&key).await?;
///     let method = repos.payment_methods().find_by_id(2).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn bills(&self) -> &dyn BillRepository;
    fn payment_methods(&self) -> &dyn PaymentMethodRepository;
}
