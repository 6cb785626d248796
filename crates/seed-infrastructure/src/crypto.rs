//! Argon2-backed identity credentials

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use seed_core::domain::{Identity, IdentitySecret};
use seed_core::error::DomainError;
use seed_core::repositories::IdentitySecretRepository;
use seed_core::services::IdentityCrypto;
use seed_security::SecretHasher;

pub struct Argon2IdentityCrypto {
    secret_repo: Arc<dyn IdentitySecretRepository>,
}

impl Argon2IdentityCrypto {
    pub fn new(secret_repo: Arc<dyn IdentitySecretRepository>) -> Self {
        Self { secret_repo }
    }
}

#[async_trait]
impl IdentityCrypto for Argon2IdentityCrypto {
    async fn create_identity_secret(
        &self,
        identity: &Identity,
        plain_secret: &str,
        expired: bool,
    ) -> Result<IdentitySecret, DomainError> {
        if let Some(existing) = self.secret_repo.find_by_identity(&identity.id).await? {
            debug!("Secret already present for {}.", identity);
            return Ok(existing);
        }

        let secret_hash = SecretHasher::hash(plain_secret)?;
        let secret = self.secret_repo
            .create(&IdentitySecret::new(identity, secret_hash, expired))
            .await?;
        info!("Created secret for {}.", identity);
        Ok(secret)
    }
}
