//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod postgres;
pub mod memory;

pub use connection::{create_pool, run_migrations};
pub use memory::MemoryStore;
pub use postgres::{
    PgCityRepository, PgCountryRepository, PgEntityRepository, PgIdentityRepository,
    PgIdentitySecretRepository, PgOperatorRepository, PgStateRepository, PgUserRepository,
};
