//! Credential port

use async_trait::async_trait;

use crate::domain::{Identity, IdentitySecret};
use crate::error::DomainError;

/// Derives and stores the secret of an identity from a plaintext value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityCrypto: Send + Sync {
    async fn create_identity_secret(
        &self,
        identity: &Identity,
        plain_secret: &str,
        expired: bool,
    ) -> Result<IdentitySecret, DomainError>;
}
