//! Configuration management

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONTEXT_DATA_PATH, DEFAULT_CONTEXT_NAME, DEFAULT_COUNTRY_FILE,
    DEFAULT_ROOT_ENTITY_ALIAS,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    /// Directory that bundled resource paths such as `/META-INF/data/` resolve under.
    pub resource_root: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

/// Raw seeding properties. Required values stay optional here and are
/// checked when the installer is built.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeedSettings {
    #[serde(default = "default_context_data_path")]
    pub context_data_path: String,
    #[serde(default = "default_context_name")]
    pub default_context_name: String,
    #[serde(default = "default_country_file")]
    pub country_file: String,
    #[serde(default)]
    pub state_file: Option<String>,
    #[serde(default)]
    pub default_country: Option<String>,
    #[serde(default = "default_root_entity_alias")]
    pub root_entity_alias: String,
    #[serde(default)]
    pub root_entity_state_code: Option<String>,
    #[serde(default)]
    pub root_entity_city_code: Option<String>,
    #[serde(default)]
    pub root_principal: Option<String>,
    #[serde(default)]
    pub root_first_name: Option<String>,
    #[serde(default)]
    pub root_last_name: Option<String>,
    #[serde(default)]
    pub root_display_name: Option<String>,
    #[serde(default)]
    pub initial_secret: Option<String>,
}

fn default_context_data_path() -> String {
    DEFAULT_CONTEXT_DATA_PATH.to_string()
}

fn default_context_name() -> String {
    DEFAULT_CONTEXT_NAME.to_string()
}

fn default_country_file() -> String {
    DEFAULT_COUNTRY_FILE.to_string()
}

fn default_root_entity_alias() -> String {
    DEFAULT_ROOT_ENTITY_ALIAS.to_string()
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            context_data_path: default_context_data_path(),
            default_context_name: default_context_name(),
            country_file: default_country_file(),
            state_file: None,
            default_country: None,
            root_entity_alias: default_root_entity_alias(),
            root_entity_state_code: None,
            root_entity_city_code: None,
            root_principal: None,
            root_first_name: None,
            root_last_name: None,
            root_display_name: None,
            initial_secret: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layers `<dir>/default`, `<dir>/<APP_ENV>` and the environment
    /// (`SEED__ROOT_PRINCIPAL` maps to `seed.root_principal`).
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        // No try_parsing: reference codes such as "01" must stay strings.
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "seed-installer")?
            .set_default("app.resource_root", "resources")?
            .set_default("database.max_connections", 5)?
            .set_default("database.run_migrations", true)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(&env).to_string_lossy()).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
