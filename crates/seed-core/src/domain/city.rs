//! City reference record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Operator, State};

/// Unique per `(operator_id, city_code)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub state_id: Uuid,
    pub city_code: String,
    pub city_name: String,
    pub is_capital: bool,
    pub created_at: DateTime<Utc>,
}

impl City {
    pub fn new(
        context: &Operator,
        state: &State,
        city_code: &str,
        city_name: &str,
        is_capital: bool,
    ) -> Self {
        Self {
            id: seed_shared::new_id(),
            operator_id: context.id,
            state_id: state.id,
            city_code: city_code.trim().to_string(),
            city_name: city_name.trim().to_string(),
            is_capital,
            created_at: seed_shared::now(),
        }
    }
}
