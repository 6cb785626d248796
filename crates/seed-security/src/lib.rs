//! # Seed Security
//! 
//! Secret hashing and initial secret generation.

pub mod secret;

pub use secret::{generate_initial_secret, SecretError, SecretHasher};
