//! Operator (root context) entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Root tenant scope. All reference and business data is partitioned by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Operator {
    pub id: Uuid,

    #[validate(length(
        min = 1,
        max = 20,
        message = "Operator name must be between 1 and 20 characters"
    ))]
    pub name: String,

    pub created_at: DateTime<Utc>,
}

impl Operator {
    pub fn new(name: &str) -> Result<Self, validator::ValidationErrors> {
        let operator = Self {
            id: seed_shared::new_id(),
            name: name.trim().to_string(),
            created_at: seed_shared::now(),
        };

        operator.validate()?;
        Ok(operator)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operator[{}]", self.name)
    }
}
