//! Repository traits (ports)

pub mod operator_repository;
pub mod location_repository;
pub mod identity_repository;
pub mod entity_repository;
pub mod user_repository;

pub use operator_repository::OperatorRepository;
pub use location_repository::{CityRepository, CountryRepository, StateRepository};
pub use identity_repository::{IdentityRepository, IdentitySecretRepository};
pub use entity_repository::EntityRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use operator_repository::MockOperatorRepository;
#[cfg(test)]
pub use location_repository::{MockCityRepository, MockCountryRepository, MockStateRepository};
#[cfg(test)]
pub use identity_repository::{MockIdentityRepository, MockIdentitySecretRepository};
#[cfg(test)]
pub use entity_repository::MockEntityRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
