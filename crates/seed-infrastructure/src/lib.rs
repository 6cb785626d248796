//! # Seed Infrastructure
//! 
//! Database, XML and resource adapters for the installer.

pub mod database;
pub mod parsers;
pub mod resources;
pub mod crypto;

pub use database::{
    create_pool, run_migrations, MemoryStore, PgCityRepository, PgCountryRepository,
    PgEntityRepository, PgIdentityRepository, PgIdentitySecretRepository, PgOperatorRepository,
    PgStateRepository, PgUserRepository,
};
pub use parsers::{XmlCityParser, XmlCountryParser, XmlStateParser};
pub use resources::{FsResourceLoader, MemoryResourceLoader};
pub use crypto::Argon2IdentityCrypto;
