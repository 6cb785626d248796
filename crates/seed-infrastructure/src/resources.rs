//! Resource loaders

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use seed_core::error::DomainError;
use seed_core::resources::ResourceLoader;

/// Resolves resource paths under a root directory, so
/// `/META-INF/data/countries.xml` reads `<root>/META-INF/data/countries.xml`.
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ResourceLoader for FsResourceLoader {
    async fn load(&self, path: &str) -> Result<String, DomainError> {
        let file = self.resolve(path);
        debug!("Loading resource {} from {}", path, file.display());
        tokio::fs::read_to_string(&file).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DomainError::ResourceNotFound(path.to_string()),
            _ => DomainError::InternalError(format!("Failed to read {}: {}", path, e)),
        })
    }
}

/// Resources held in memory, keyed by their full path.
#[derive(Default)]
pub struct MemoryResourceLoader {
    resources: HashMap<String, String>,
}

impl MemoryResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.resources.insert(path.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl ResourceLoader for MemoryResourceLoader {
    async fn load(&self, path: &str) -> Result<String, DomainError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::ResourceNotFound(path.to_string()))
    }
}
