//! State reference record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Country, Operator};

/// Unique per `(operator_id, state_code)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub country_id: Uuid,
    pub state_code: String,
    pub state_name: String,
    pub created_at: DateTime<Utc>,
}

impl State {
    pub fn new(context: &Operator, country: &Country, state_code: &str, state_name: &str) -> Self {
        Self {
            id: seed_shared::new_id(),
            operator_id: context.id,
            country_id: country.id,
            state_code: state_code.trim().to_string(),
            state_name: state_name.trim().to_string(),
            created_at: seed_shared::now(),
        }
    }
}
