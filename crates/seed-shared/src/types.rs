//! Common types

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}
