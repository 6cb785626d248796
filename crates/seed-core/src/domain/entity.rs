// ============================================================================
// Seed Core - Entity (business unit)
// File: crates/seed-core/src/domain/entity.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{City, Operator};

/// Template for an entity before it is bound to an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPrototype {
    pub alias: String,
    pub summary: String,
    pub entity_type: char,
    pub city_id: Option<Uuid>,
}

impl EntityPrototype {
    pub fn new(alias: &str, summary: &str, entity_type: char) -> Self {
        Self {
            alias: alias.trim().to_string(),
            summary: summary.trim().to_string(),
            entity_type,
            city_id: None,
        }
    }

    pub fn with_city(mut self, city: &City) -> Self {
        self.city_id = Some(city.id);
        self
    }
}

/// Business unit, unique per `(operator_id, alias)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Entity {
    pub id: Uuid,
    pub operator_id: Uuid,

    #[validate(length(min = 1, max = 20, message = "Alias must be between 1 and 20 characters"))]
    pub alias: String,

    #[validate(length(max = 255, message = "Summary too long"))]
    pub summary: String,

    pub entity_type: char,
    pub city_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Entity {
    pub fn from_prototype(
        context: &Operator,
        prototype: &EntityPrototype,
    ) -> Result<Self, validator::ValidationErrors> {
        let entity = Self {
            id: seed_shared::new_id(),
            operator_id: context.id,
            alias: prototype.alias.clone(),
            summary: prototype.summary.clone(),
            entity_type: prototype.entity_type,
            city_id: prototype.city_id,
            created_at: seed_shared::now(),
        };

        entity.validate()?;
        Ok(entity)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity[{}]", self.alias)
    }
}
