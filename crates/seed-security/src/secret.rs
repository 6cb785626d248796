//! Identity secret hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distr::Alphanumeric, Rng};
use thiserror::Error;

use seed_shared::constants::GENERATED_SECRET_LENGTH;

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Secret must not be empty")]
    EmptySecret,
}

pub struct SecretHasher;

impl SecretHasher {
    pub fn hash(secret: &str) -> Result<String, SecretError> {
        if secret.is_empty() {
            return Err(SecretError::EmptySecret);
        }
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| SecretError::HashError(e.to_string()))
    }

    pub fn verify(secret: &str, hash: &str) -> Result<bool, SecretError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| SecretError::HashError(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Random alphanumeric secret for installs that configure none.
pub fn generate_initial_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LENGTH)
        .map(char::from)
        .collect()
}
