//! Identity repository traits (ports)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Identity, IdentitySecret};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn find_by_principal(&self, principal: &str) -> Result<Option<Identity>, DomainError>;
    async fn create(&self, identity: &Identity) -> Result<Identity, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentitySecretRepository: Send + Sync {
    async fn find_by_identity(
        &self,
        identity_id: &Uuid,
    ) -> Result<Option<IdentitySecret>, DomainError>;
    async fn create(&self, secret: &IdentitySecret) -> Result<IdentitySecret, DomainError>;
}
