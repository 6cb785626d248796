//! User entity: binds an identity to an entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Identity};

/// Unique per `(entity_id, identity_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub entity_id: Uuid,
    pub identity_id: Uuid,
    pub user_key: String,
    pub user_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(entity: &Entity, identity: &Identity) -> Self {
        let user_name = if identity.display_name.is_empty() {
            identity.full_name()
        } else {
            identity.display_name.clone()
        };
        Self {
            id: seed_shared::new_id(),
            entity_id: entity.id,
            identity_id: identity.id,
            user_key: identity.principal.clone(),
            user_name,
            is_active: true,
            created_at: seed_shared::now(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User[{}]", seed_shared::utils::mask_principal(&self.user_key))
    }
}
