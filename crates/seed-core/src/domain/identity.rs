// ============================================================================
// Seed Core - Identity Entity
// File: crates/seed-core/src/domain/identity.rs
// Description: Person record with a unique principal and its derived secret
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PersonalData {
    #[validate(length(max = 64, message = "First name too long"))]
    pub first_name: String,
    #[validate(length(max = 64, message = "Last name too long"))]
    pub last_name: String,
}

/// Identity entity, unique by principal (login or email)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Identity {
    pub id: Uuid,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Principal must be between 1 and 64 characters"
    ))]
    pub principal: String,

    #[validate(length(max = 32, message = "Display name too long"))]
    pub display_name: String,

    #[validate(nested)]
    pub personal_data: PersonalData,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(
        principal: &str,
        display_name: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, validator::ValidationErrors> {
        let identity = Self {
            id: seed_shared::new_id(),
            principal: principal.trim().to_string(),
            display_name: display_name.trim().to_string(),
            personal_data: PersonalData {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            },
            created_at: seed_shared::now(),
        };

        identity.validate()?;
        Ok(identity)
    }

    pub fn full_name(&self) -> String {
        let PersonalData { first_name, last_name } = &self.personal_data;
        match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => format!("{} {}", first_name, last_name),
            (false, true) => first_name.clone(),
            (true, false) => last_name.clone(),
            _ => self.principal.clone(),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identity[{}]", seed_shared::utils::mask_principal(&self.principal))
    }
}

/// Stored credential derived from a plaintext secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentitySecret {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub secret_hash: String,
    /// Forces a secret change on first login when set.
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

impl IdentitySecret {
    pub fn new(identity: &Identity, secret_hash: String, expired: bool) -> Self {
        Self {
            id: seed_shared::new_id(),
            identity_id: identity.id,
            secret_hash,
            expired,
            created_at: seed_shared::now(),
        }
    }
}
