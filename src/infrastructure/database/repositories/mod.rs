//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod bill_repository;
pub mod payment_method_repository;
pub mod repository_provider;

pub use bill_repository::SeaOrmBillRepository;
pub use payment_method_repository::SeaOrmPaymentMethodRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
