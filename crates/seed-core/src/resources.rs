//! Resource loading trait (port)

use async_trait::async_trait;
use crate::error::DomainError;

/// Resolves bundled resource paths such as `/META-INF/data/countries.xml`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Fails with [`DomainError::ResourceNotFound`] when nothing exists at `path`.
    async fn load(&self, path: &str) -> Result<String, DomainError>;
}
