// ============================================================================
// Seed Core - User Install Service
// File: crates/seed-core/src/services/user_install_service.rs
// ============================================================================
//! Materializes a user from an entity and a principal

use std::sync::Arc;

use async_trait::async_trait;
use seed_shared::utils::mask_principal;
use tracing::{debug, info};

use crate::domain::{Entity, User};
use crate::error::DomainError;
use crate::repositories::{IdentityRepository, UserRepository};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserInstallService: Send + Sync {
    /// Returns the user binding `principal` to `entity`, creating it if absent.
    async fn install_user(&self, entity: &Entity, principal: &str) -> Result<User, DomainError>;
}

pub struct DefaultUserInstallService {
    identity_repo: Arc<dyn IdentityRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl DefaultUserInstallService {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self { identity_repo, user_repo }
    }
}

#[async_trait]
impl UserInstallService for DefaultUserInstallService {
    async fn install_user(&self, entity: &Entity, principal: &str) -> Result<User, DomainError> {
        let identity = self
            .identity_repo
            .find_by_principal(principal)
            .await?
            .ok_or_else(|| DomainError::IdentityNotFound(mask_principal(principal)))?;

        let existing = self
            .user_repo
            .find_by_entity_and_identity(&entity.id, &identity.id)
            .await?;
        if let Some(user) = existing {
            debug!("Found existing {} for {}.", user, entity);
            return Ok(user);
        }

        let user = self.user_repo.create(&User::new(entity, &identity)).await?;
        info!("Created {} for {}.", user, entity);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityPrototype, Identity, Operator};
    use crate::repositories::{MockIdentityRepository, MockUserRepository};

    fn root_entity() -> Entity {
        let context = Operator::new("DEFAULT").unwrap();
        Entity::from_prototype(&context, &EntityPrototype::new("ROOT", "", 'C')).unwrap()
    }

    #[tokio::test]
    async fn test_creates_user_for_identity() {
        let identity = Identity::new("alice@example.com", "Alice", "Alice", "Doe").unwrap();
        let found = identity.clone();

        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_principal()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let mut users = MockUserRepository::new();
        users.expect_find_by_entity_and_identity().returning(|_, _| Ok(None));
        users.expect_create().times(1).returning(|u| Ok(u.clone()));

        let service = DefaultUserInstallService::new(Arc::new(identities), Arc::new(users));
        let entity = root_entity();
        let user = service.install_user(&entity, "alice@example.com").await.unwrap();

        assert_eq!(user.entity_id, entity.id);
        assert_eq!(user.identity_id, identity.id);
        assert_eq!(user.user_key, "alice@example.com");
        assert_eq!(user.user_name, "Alice");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_returns_existing_user() {
        let entity = root_entity();
        let identity = Identity::new("alice@example.com", "Alice", "Alice", "Doe").unwrap();
        let existing = User::new(&entity, &identity);
        let existing_id = existing.id;

        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_principal().returning(move |_| Ok(Some(identity.clone())));

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_entity_and_identity()
            .returning(move |_, _| Ok(Some(existing.clone())));
        users.expect_create().never();

        let service = DefaultUserInstallService::new(Arc::new(identities), Arc::new(users));
        let user = service.install_user(&entity, "alice@example.com").await.unwrap();
        assert_eq!(user.id, existing_id);
    }

    #[tokio::test]
    async fn test_missing_identity_fails() {
        let mut identities = MockIdentityRepository::new();
        identities.expect_find_by_principal().returning(|_| Ok(None));
        let users = MockUserRepository::new();

        let service = DefaultUserInstallService::new(Arc::new(identities), Arc::new(users));
        let result = service.install_user(&root_entity(), "nobody").await;
        assert!(matches!(result, Err(DomainError::IdentityNotFound(_))));
    }
}
