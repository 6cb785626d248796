//! Country reference record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Operator;

/// Unique per `(operator_id, country_code)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub country_code: String,
    pub country_name: String,
    pub created_at: DateTime<Utc>,
}

impl Country {
    pub fn new(context: &Operator, country_code: &str, country_name: &str) -> Self {
        Self {
            id: seed_shared::new_id(),
            operator_id: context.id,
            country_code: country_code.trim().to_string(),
            country_name: country_name.trim().to_string(),
            created_at: seed_shared::now(),
        }
    }
}
