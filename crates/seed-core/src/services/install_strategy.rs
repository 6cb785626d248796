//! Install strategy: strategy defaults plus the post-seed hook

use async_trait::async_trait;

use crate::domain::{Entity, Operator, User};
use crate::error::DomainError;

/// Values a deployment supplies when configuration leaves them out, and
/// the action to run once after the first installation.
#[async_trait]
pub trait InstallStrategy: Send + Sync {
    fn default_country(&self) -> Option<String> {
        None
    }

    /// States are read from this file, relative to the data path.
    fn default_state_file(&self) -> Option<String> {
        None
    }

    /// The first secret of the root identity is derived from this value.
    fn initial_secret(&self) -> Option<String> {
        None
    }

    async fn run_once(
        &self,
        context: &Operator,
        root_entity: &Entity,
        root_user: &User,
    ) -> Result<(), DomainError>;
}

pub struct DefaultInstallStrategy;

#[async_trait]
impl InstallStrategy for DefaultInstallStrategy {
    async fn run_once(
        &self,
        _context: &Operator,
        _root_entity: &Entity,
        _root_user: &User,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

type RunOnceFn = dyn Fn(&Operator, &Entity, &User) -> Result<(), DomainError> + Send + Sync;

/// Strategy built from a closure, with optional defaults.
pub struct FnInstallStrategy {
    run_once: Box<RunOnceFn>,
    default_country: Option<String>,
    default_state_file: Option<String>,
    initial_secret: Option<String>,
}

impl FnInstallStrategy {
    pub fn new<F>(run_once: F) -> Self
    where
        F: Fn(&Operator, &Entity, &User) -> Result<(), DomainError> + Send + Sync + 'static,
    {
        Self {
            run_once: Box::new(run_once),
            default_country: None,
            default_state_file: None,
            initial_secret: None,
        }
    }

    pub fn with_default_country(mut self, country_code: &str) -> Self {
        self.default_country = Some(country_code.to_string());
        self
    }

    pub fn with_default_state_file(mut self, state_file: &str) -> Self {
        self.default_state_file = Some(state_file.to_string());
        self
    }

    pub fn with_initial_secret(mut self, secret: &str) -> Self {
        self.initial_secret = Some(secret.to_string());
        self
    }
}

#[async_trait]
impl InstallStrategy for FnInstallStrategy {
    fn default_country(&self) -> Option<String> {
        self.default_country.clone()
    }

    fn default_state_file(&self) -> Option<String> {
        self.default_state_file.clone()
    }

    fn initial_secret(&self) -> Option<String> {
        self.initial_secret.clone()
    }

    async fn run_once(
        &self,
        context: &Operator,
        root_entity: &Entity,
        root_user: &User,
    ) -> Result<(), DomainError> {
        (self.run_once)(context, root_entity, root_user)
    }
}
