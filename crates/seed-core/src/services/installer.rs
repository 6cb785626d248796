// ============================================================================
// Seed Core - First-boot Installer
// File: crates/seed-core/src/services/installer.rs
// ============================================================================
//! Idempotent seeding of the root context, reference data and root user

use std::collections::HashSet;
use std::sync::Arc;

use seed_shared::config::SeedSettings;
use seed_shared::constants::{CITY_FILE_PREFIX, CITY_FILE_SUFFIX, DEFAULT_ENTITY_TYPE};
use tracing::{debug, info, warn};

use super::identity_crypto::IdentityCrypto;
use super::install_strategy::InstallStrategy;
use super::installer_config::InstallerConfig;
use super::user_install_service::UserInstallService;
use crate::domain::{City, Country, Entity, EntityPrototype, Identity, Operator, State, User};
use crate::error::DomainError;
use crate::parsers::{CityParser, CountryParser, StateParser};
use crate::repositories::{
    CityRepository, CountryRepository, EntityRepository, IdentityRepository, OperatorRepository,
    StateRepository,
};
use crate::resources::ResourceLoader;

/// Collaborators the installer reads and writes through.
#[derive(Clone)]
pub struct InstallerDeps {
    pub operators: Arc<dyn OperatorRepository>,
    pub countries: Arc<dyn CountryRepository>,
    pub states: Arc<dyn StateRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub identities: Arc<dyn IdentityRepository>,
    pub entities: Arc<dyn EntityRepository>,
    pub identity_crypto: Arc<dyn IdentityCrypto>,
    pub user_install: Arc<dyn UserInstallService>,
    pub country_parser: Arc<dyn CountryParser>,
    pub state_parser: Arc<dyn StateParser>,
    pub city_parser: Arc<dyn CityParser>,
    pub resources: Arc<dyn ResourceLoader>,
}

/// A state whose city file could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CityLoadWarning {
    pub state_code: String,
    pub resource: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CountryInstall {
    pub country: Country,
    pub saved: usize,
}

#[derive(Debug, Clone)]
pub struct StateAndCityInstall {
    pub root_state: State,
    pub root_city: City,
    pub states_saved: usize,
    pub cities_saved: usize,
    pub city_warnings: Vec<CityLoadWarning>,
}

#[derive(Debug, Clone)]
pub struct RootInstall {
    pub identity: Identity,
    pub identity_created: bool,
    pub entity: Entity,
    pub user: User,
}

/// Everything the first-boot pass created or reused.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub context: Operator,
    pub country: Country,
    pub root_state: State,
    pub root_city: City,
    pub root_identity: Identity,
    pub identity_created: bool,
    pub root_entity: Entity,
    pub root_user: User,
    pub countries_saved: usize,
    pub states_saved: usize,
    pub cities_saved: usize,
    pub city_warnings: Vec<CityLoadWarning>,
    /// Set only when no initial secret was configured and a new identity received a generated one.
    pub generated_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SeedOutcome {
    AlreadySeeded { context: Operator },
    Seeded(Box<SeedReport>),
}

impl SeedOutcome {
    pub fn context(&self) -> &Operator {
        match self {
            SeedOutcome::AlreadySeeded { context } => context,
            SeedOutcome::Seeded(report) => &report.context,
        }
    }

    pub fn is_seeded_now(&self) -> bool {
        matches!(self, SeedOutcome::Seeded(_))
    }
}

/// Installs the root context and its baseline records when the store is clean.
pub struct Installer {
    config: InstallerConfig,
    deps: InstallerDeps,
    strategy: Arc<dyn InstallStrategy>,
}

impl Installer {
    /// Resolves `settings` against the strategy defaults; missing required
    /// properties fail here.
    pub fn new(
        settings: &SeedSettings,
        deps: InstallerDeps,
        strategy: Arc<dyn InstallStrategy>,
    ) -> Result<Self, DomainError> {
        let config = InstallerConfig::resolve(settings, strategy.as_ref())?;
        Ok(Self { config, deps, strategy })
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Seeds the store unless the configured context already exists.
    ///
    /// There is no rollback: an error after the context is created leaves
    /// the records written so far in place.
    pub async fn ensure_seeded(&self) -> Result<SeedOutcome, DomainError> {
        let context_name = &self.config.context_name;
        if let Some(context) = self.deps.operators.find_by_name(context_name).await? {
            debug!("Found existing {}, nothing to install.", context);
            return Ok(SeedOutcome::AlreadySeeded { context });
        }

        let context = self.deps.operators.create(&Operator::new(context_name)?).await?;
        info!("Created {}.", context);

        let countries = self.install_countries(&context).await?;
        let places = self.install_states_and_cities(&context, &countries.country).await?;
        let root = self.install_root(&context, &places.root_city).await?;

        self.strategy.run_once(&context, &root.entity, &root.user).await?;
        info!("Installation of {} complete.", context);

        let generated_secret = match (&self.config.initial_secret, root.identity_created) {
            (secret, true) if secret.is_generated() => Some(secret.expose().to_string()),
            _ => None,
        };

        Ok(SeedOutcome::Seeded(Box::new(SeedReport {
            context,
            country: countries.country,
            root_state: places.root_state,
            root_city: places.root_city,
            root_identity: root.identity,
            identity_created: root.identity_created,
            root_entity: root.entity,
            root_user: root.user,
            countries_saved: countries.saved,
            states_saved: places.states_saved,
            cities_saved: places.cities_saved,
            city_warnings: places.city_warnings,
            generated_secret,
        })))
    }

    /// Installs all countries and returns the configured default one.
    pub async fn install_countries(
        &self,
        context: &Operator,
    ) -> Result<CountryInstall, DomainError> {
        let resource = self.config.country_file_path();
        let source = self.deps.resources.load(&resource).await?;
        let countries = self.deps.country_parser.parse_countries(context, &resource, &source)?;
        let managed = self.deps.countries.save_all(countries).await?;
        info!("Saved {} countries.", managed.len());

        let code = &self.config.default_country;
        let country = self
            .deps
            .countries
            .find_by_operator_and_code(&context.id, code)
            .await?
            .ok_or_else(|| DomainError::CountryNotFound(code.clone()))?;

        Ok(CountryInstall { country, saved: managed.len() })
    }

    /// Installs the states of `country` and the cities of each state, and
    /// returns the configured root city.
    ///
    /// A state whose city file fails to load is skipped and reported in
    /// `city_warnings`.
    pub async fn install_states_and_cities(
        &self,
        context: &Operator,
        country: &Country,
    ) -> Result<StateAndCityInstall, DomainError> {
        let resource = self.config.state_file_path();
        let source = self.deps.resources.load(&resource).await?;
        let states = self.deps.state_parser.parse_states(context, country, &resource, &source)?;
        let managed_states = self.deps.states.save_all(states).await?;
        info!("Saved {} states.", managed_states.len());

        let state_code = &self.config.root_entity_state_code;
        let root_state = self
            .deps
            .states
            .find_by_operator_and_code(&context.id, state_code)
            .await?
            .ok_or_else(|| DomainError::StateNotFound(state_code.clone()))?;

        let mut seen = HashSet::new();
        let mut cities_saved = 0;
        let mut city_warnings = Vec::new();
        for state in managed_states.iter().filter(|s| seen.insert(s.id)) {
            let resource = self.resolve_city_data_path(country, state);
            match self.install_cities(context, state, &resource).await {
                Ok(saved) => {
                    info!("Saved {} cities for state {}.", saved, state.state_code);
                    cities_saved += saved;
                }
                Err(e) => {
                    warn!("Skipped cities for state {}: {}", state.state_code, e);
                    city_warnings.push(CityLoadWarning {
                        state_code: state.state_code.clone(),
                        resource,
                        message: e.to_string(),
                    });
                }
            }
        }

        let city_code = &self.config.root_entity_city_code;
        let root_city = self
            .deps
            .cities
            .find_by_operator_and_code(&context.id, city_code)
            .await?
            .ok_or_else(|| DomainError::CityNotFound(city_code.clone()))?;

        Ok(StateAndCityInstall {
            root_state,
            root_city,
            states_saved: managed_states.len(),
            cities_saved,
            city_warnings,
        })
    }

    async fn install_cities(
        &self,
        context: &Operator,
        state: &State,
        resource: &str,
    ) -> Result<usize, DomainError> {
        let source = self.deps.resources.load(resource).await?;
        let cities = self.deps.city_parser.parse_cities(context, state, resource, &source)?;
        Ok(self.deps.cities.save_all(cities).await?.len())
    }

    /// Installs the root identity, root entity and root user.
    pub async fn install_root(
        &self,
        context: &Operator,
        root_city: &City,
    ) -> Result<RootInstall, DomainError> {
        let principal = &self.config.root_principal;
        let existing = self.deps.identities.find_by_principal(principal).await?;
        let (identity, identity_created) = match existing {
            Some(identity) => {
                debug!("Found existing root {}.", identity);
                (identity, false)
            }
            None => {
                let identity = Identity::new(
                    principal,
                    &self.config.root_display_name,
                    &self.config.root_first_name,
                    &self.config.root_last_name,
                )?;
                let identity = self.deps.identities.create(&identity).await?;
                info!("Created root {}.", identity);
                self.deps
                    .identity_crypto
                    .create_identity_secret(&identity, self.config.initial_secret.expose(), false)
                    .await?;
                (identity, true)
            }
        };

        let prototype =
            EntityPrototype::new(&self.config.root_entity_alias, "", DEFAULT_ENTITY_TYPE)
                .with_city(root_city);
        let entity = self.install_entity(context, &prototype).await?;

        let user = self.deps.user_install.install_user(&entity, &identity.principal).await?;

        Ok(RootInstall { identity, identity_created, entity, user })
    }

    /// Finds the entity for `(context, prototype.alias)` or creates it from the prototype.
    pub async fn install_entity(
        &self,
        context: &Operator,
        prototype: &EntityPrototype,
    ) -> Result<Entity, DomainError> {
        let existing = self
            .deps
            .entities
            .find_by_operator_and_alias(&context.id, &prototype.alias)
            .await?;
        match existing {
            Some(entity) => {
                debug!(
                    "Found existing entity for context {} and alias {}.",
                    context.name, prototype.alias
                );
                Ok(entity)
            }
            None => {
                info!(
                    "Will install entity for context {} and alias {}.",
                    context.name, prototype.alias
                );
                let entity = Entity::from_prototype(context, prototype)?;
                self.deps.entities.create(&entity).await
            }
        }
    }

    /// `<data path><country code>/cities-<state code>.xml`
    pub fn resolve_city_data_path(&self, country: &Country, state: &State) -> String {
        format!(
            "{}{}/{}{}{}",
            self.config.context_data_path,
            country.country_code,
            CITY_FILE_PREFIX,
            state.state_code,
            CITY_FILE_SUFFIX
        )
    }

    pub fn create_prototype(alias: &str, summary: &str, entity_type: char) -> EntityPrototype {
        EntityPrototype::new(alias, summary, entity_type)
    }
}
