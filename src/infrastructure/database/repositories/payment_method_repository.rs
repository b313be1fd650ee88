//! SeaORM implementation of PaymentMethodRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::{DomainError, DomainResult, PaymentMethod, PaymentMethodRepository};
use crate::infrastructure::database::entities::payment_method;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

fn entity_to_domain(m: payment_method::Model) -> PaymentMethod {
    PaymentMethod {
        id: m.id,
        description: m.description,
    }
}

pub struct SeaOrmPaymentMethodRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentMethodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentMethodRepository for SeaOrmPaymentMethodRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>> {
        let model = payment_method::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        let models = payment_method::Entity::find()
            .order_by_asc(payment_method::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
