//! Reference data parser traits (ports)
//!
//! Parsers turn the text of a bundled resource into records scoped to the
//! given context. `resource` names the source in error messages.

use crate::domain::{City, Country, Operator, State};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
pub trait CountryParser: Send + Sync {
    fn parse_countries(
        &self,
        context: &Operator,
        resource: &str,
        source: &str,
    ) -> Result<Vec<Country>, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait StateParser: Send + Sync {
    fn parse_states(
        &self,
        context: &Operator,
        country: &Country,
        resource: &str,
        source: &str,
    ) -> Result<Vec<State>, DomainError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait CityParser: Send + Sync {
    fn parse_cities(
        &self,
        context: &Operator,
        state: &State,
        resource: &str,
        source: &str,
    ) -> Result<Vec<City>, DomainError>;
}
