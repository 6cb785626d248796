//! PostgreSQL repository implementations

pub mod operator_repo_impl;
pub mod location_repo_impl;
pub mod identity_repo_impl;
pub mod entity_repo_impl;
pub mod user_repo_impl;

pub use operator_repo_impl::PgOperatorRepository;
pub use location_repo_impl::{PgCityRepository, PgCountryRepository, PgStateRepository};
pub use identity_repo_impl::{PgIdentityRepository, PgIdentitySecretRepository};
pub use entity_repo_impl::PgEntityRepository;
pub use user_repo_impl::PgUserRepository;

use seed_core::error::DomainError;
use tracing::error;

pub(crate) fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", action, e);
        DomainError::DatabaseError(e.to_string())
    }
}
