//! # Seed Core
//! 
//! Domain entities, repository traits, and the first-boot installer.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod parsers;
pub mod resources;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
