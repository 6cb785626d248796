//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("Invalid property {name}: {reason}")]
    InvalidProperty { name: String, reason: String },

    #[error(
        "Country {0} not found; provide a required country to allow for default city resolution"
    )]
    CountryNotFound(String),

    #[error("State {0} not found; provide a required state to allow for default city resolution")]
    StateNotFound(String),

    #[error("City {0} not found; provide required data to allow for default city resolution")]
    CityNotFound(String),

    #[error("Identity not found: {0}")]
    IdentityNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Parse error in {resource}: {message}")]
    ParseError { resource: String, message: String },

    #[error("Secret hash error: {0}")]
    SecretHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(err.to_string())
    }
}

impl From<seed_security::SecretError> for DomainError {
    fn from(err: seed_security::SecretError) -> Self {
        DomainError::SecretHashError(err.to_string())
    }
}
