//! Reference data repository traits (ports)
//!
//! `save_all` inserts records whose natural key is absent and returns the
//! stored record for every input, so repeated codes are stored once.

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{City, Country, State};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        country_code: &str,
    ) -> Result<Option<Country>, DomainError>;
    async fn save_all(&self, countries: Vec<Country>) -> Result<Vec<Country>, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        state_code: &str,
    ) -> Result<Option<State>, DomainError>;
    async fn save_all(&self, states: Vec<State>) -> Result<Vec<State>, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        city_code: &str,
    ) -> Result<Option<City>, DomainError>;
    async fn save_all(&self, cities: Vec<City>) -> Result<Vec<City>, DomainError>;
}
