//! Validated installer configuration

use seed_shared::config::SeedSettings;
use seed_shared::constants::DISPLAY_NAME_MAX_LENGTH;
use seed_shared::utils::non_blank;
use validator::{Validate, ValidationErrors};

use super::install_strategy::InstallStrategy;
use crate::error::DomainError;

/// Where the first secret of the root identity comes from.
#[derive(Clone, PartialEq)]
pub enum InitialSecret {
    Configured(String),
    Generated(String),
}

impl std::fmt::Debug for InitialSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitialSecret::Configured(_) => f.write_str("Configured(***)"),
            InitialSecret::Generated(_) => f.write_str("Generated(***)"),
        }
    }
}

impl InitialSecret {
    pub fn expose(&self) -> &str {
        match self {
            InitialSecret::Configured(s) | InitialSecret::Generated(s) => s,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, InitialSecret::Generated(_))
    }
}

/// Seeding properties with every default applied.
///
/// Built once from [`SeedSettings`] and the install strategy; a missing
/// required value fails here rather than halfway through seeding. Length
/// bounds match the columns the root records are stored in.
#[derive(Debug, Clone, Validate)]
pub struct InstallerConfig {
    /// Always ends with `/`.
    #[validate(length(min = 1))]
    pub context_data_path: String,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub context_name: String,
    #[validate(length(min = 1))]
    pub country_file: String,
    #[validate(length(min = 1))]
    pub state_file: String,
    #[validate(length(min = 1))]
    pub default_country: String,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub root_entity_alias: String,
    pub root_entity_state_code: String,
    pub root_entity_city_code: String,
    #[validate(length(min = 1, max = 64, message = "must be between 1 and 64 characters"))]
    pub root_principal: String,
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub root_first_name: String,
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub root_last_name: String,
    #[validate(length(max = 32, message = "must be at most 32 characters"))]
    pub root_display_name: String,
    pub initial_secret: InitialSecret,
}

fn required(value: Option<&str>, name: &'static str) -> Result<String, DomainError> {
    non_blank(value).ok_or(DomainError::MissingProperty(name))
}

/// Reports the first failing field (by name) as a `seed.*` property.
fn invalid_property(errors: ValidationErrors) -> DomainError {
    let first = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            (format!("seed.{}", field), reason)
        })
        .min_by(|a, b| a.0.cmp(&b.0));

    match first {
        Some((name, reason)) => DomainError::InvalidProperty { name, reason },
        None => DomainError::from(errors),
    }
}

/// First name cut to the display name column width.
fn default_display_name(first_name: &str) -> String {
    let display: String = first_name.chars().take(DISPLAY_NAME_MAX_LENGTH).collect();
    display.trim_end().to_string()
}

impl InstallerConfig {
    pub fn resolve(
        settings: &SeedSettings,
        strategy: &dyn InstallStrategy,
    ) -> Result<Self, DomainError> {
        let mut context_data_path =
            required(Some(&settings.context_data_path), "seed.context_data_path")?;
        if !context_data_path.ends_with('/') {
            context_data_path.push('/');
        }

        let state_file = non_blank(settings.state_file.as_deref())
            .or_else(|| non_blank(strategy.default_state_file().as_deref()))
            .ok_or(DomainError::MissingProperty("seed.state_file"))?;
        let default_country = non_blank(settings.default_country.as_deref())
            .or_else(|| non_blank(strategy.default_country().as_deref()))
            .ok_or(DomainError::MissingProperty("seed.default_country"))?;

        let root_first_name =
            required(settings.root_first_name.as_deref(), "seed.root_first_name")?;
        let root_display_name = non_blank(settings.root_display_name.as_deref())
            .unwrap_or_else(|| default_display_name(&root_first_name));

        let initial_secret = match non_blank(settings.initial_secret.as_deref())
            .or_else(|| non_blank(strategy.initial_secret().as_deref()))
        {
            Some(secret) => InitialSecret::Configured(secret),
            None => InitialSecret::Generated(seed_security::generate_initial_secret()),
        };

        let config = Self {
            context_data_path,
            context_name: required(
                Some(&settings.default_context_name),
                "seed.default_context_name",
            )?,
            country_file: required(Some(&settings.country_file), "seed.country_file")?,
            state_file,
            default_country,
            root_entity_alias: required(
                Some(&settings.root_entity_alias),
                "seed.root_entity_alias",
            )?,
            root_entity_state_code: required(
                settings.root_entity_state_code.as_deref(),
                "seed.root_entity_state_code",
            )?,
            root_entity_city_code: required(
                settings.root_entity_city_code.as_deref(),
                "seed.root_entity_city_code",
            )?,
            root_principal: required(settings.root_principal.as_deref(), "seed.root_principal")?,
            root_first_name,
            root_last_name: required(settings.root_last_name.as_deref(), "seed.root_last_name")?,
            root_display_name,
            initial_secret,
        };

        config.validate().map_err(invalid_property)?;
        Ok(config)
    }

    pub fn country_file_path(&self) -> String {
        format!("{}{}", self.context_data_path, self.country_file)
    }

    pub fn state_file_path(&self) -> String {
        format!("{}{}", self.context_data_path, self.state_file)
    }
}
