//! Entity repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Entity;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    async fn find_by_operator_and_alias(
        &self,
        operator_id: &Uuid,
        alias: &str,
    ) -> Result<Option<Entity>, DomainError>;
    async fn create(&self, entity: &Entity) -> Result<Entity, DomainError>;
}
