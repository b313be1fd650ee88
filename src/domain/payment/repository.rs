use async_trait::async_trait;

use super::model::PaymentMethod;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>>;
    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>>;
}
