use std::sync::Arc;

use tracing::{error, info, warn};

use seed_core::services::{
    DefaultInstallStrategy, DefaultUserInstallService, Installer, InstallerDeps, SeedOutcome,
};
use seed_infrastructure::{
    create_pool, run_migrations, Argon2IdentityCrypto, FsResourceLoader, PgCityRepository,
    PgCountryRepository, PgEntityRepository, PgIdentityRepository, PgIdentitySecretRepository,
    PgOperatorRepository, PgStateRepository, PgUserRepository, XmlCityParser, XmlCountryParser,
    XmlStateParser,
};
use seed_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    seed_shared::telemetry::init_telemetry()?;

    info!("Seed installer starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(&config.database.url, config.database.max_connections).await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }
    info!("Database connection established.");

    let identities = Arc::new(PgIdentityRepository::new(pool.clone()));
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let secrets = Arc::new(PgIdentitySecretRepository::new(pool.clone()));

    let deps = InstallerDeps {
        operators: Arc::new(PgOperatorRepository::new(pool.clone())),
        countries: Arc::new(PgCountryRepository::new(pool.clone())),
        states: Arc::new(PgStateRepository::new(pool.clone())),
        cities: Arc::new(PgCityRepository::new(pool.clone())),
        identities: identities.clone(),
        entities: Arc::new(PgEntityRepository::new(pool.clone())),
        identity_crypto: Arc::new(Argon2IdentityCrypto::new(secrets)),
        user_install: Arc::new(DefaultUserInstallService::new(identities, users)),
        country_parser: Arc::new(XmlCountryParser),
        state_parser: Arc::new(XmlStateParser),
        city_parser: Arc::new(XmlCityParser),
        resources: Arc::new(FsResourceLoader::new(config.app.resource_root.clone())),
    };

    let installer = match Installer::new(&config.seed, deps, Arc::new(DefaultInstallStrategy)) {
        Ok(i) => i,
        Err(e) => {
            error!("Invalid seed configuration: {}", e);
            std::process::exit(1);
        }
    };

    match installer.ensure_seeded().await {
        Ok(SeedOutcome::AlreadySeeded { context }) => {
            info!("{} already installed, nothing to do.", context);
        }
        Ok(SeedOutcome::Seeded(report)) => {
            info!(
                countries = report.countries_saved,
                states = report.states_saved,
                cities = report.cities_saved,
                "Installed {} with root {} and {}.",
                report.context, report.root_entity, report.root_user
            );
            for warning in &report.city_warnings {
                warn!(
                    "Cities of state {} not loaded from {}: {}",
                    warning.state_code, warning.resource, warning.message
                );
            }
            if let Some(secret) = &report.generated_secret {
                // Printed once, outside the log stream.
                eprintln!(
                    "Generated initial secret for {}: {}",
                    report.root_identity.principal, secret
                );
            }
        }
        Err(e) => {
            error!("Installation failed: {}", e);
            pool.close().await;
            std::process::exit(1);
        }
    }

    pool.close().await;
    Ok(())
}
