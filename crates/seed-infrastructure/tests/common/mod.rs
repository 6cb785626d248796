//! Shared fixture: the installer wired to an in-memory store, the XML
//! parsers and an in-memory resource tree.

#![allow(dead_code)]

use std::sync::Arc;

use seed_core::services::{
    DefaultInstallStrategy, DefaultUserInstallService, InstallStrategy, Installer, InstallerDeps,
};
use seed_infrastructure::{
    Argon2IdentityCrypto, MemoryResourceLoader, MemoryStore, XmlCityParser, XmlCountryParser,
    XmlStateParser,
};
use seed_shared::config::SeedSettings;

pub const COUNTRIES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<countries>
  <country countryCode="BR" countryName="Brasil"/>
  <country countryCode="PT" countryName="Portugal"/>
  <country countryCode="BR" countryName="Brasil (duplicado)"/>
</countries>"#;

pub const STATES_XML: &str = r#"<states>
  <state stateCode="SP" stateName="São Paulo"/>
  <state stateCode="RJ" stateName="Rio de Janeiro"/>
  <state stateCode="SC" stateName="Santa Catarina"/>
</states>"#;

pub const SP_CITIES_XML: &str = r#"<cities>
  <city cityCode="3550308" cityName="São Paulo" capital="true"/>
  <city cityCode="3509502" cityName="Campinas"/>
</cities>"#;

pub const RJ_CITIES_XML: &str = r#"<cities>
  <city cityCode="3304557" cityName="Rio de Janeiro" capital="true"/>
</cities>"#;

pub const SC_CITIES_XML: &str = r#"<cities>
  <city cityCode="4205407" cityName="Florianópolis" capital="true"/>
</cities>"#;

/// Country, state and every per-state city file.
pub fn full_resources() -> MemoryResourceLoader {
    MemoryResourceLoader::new()
        .with("/META-INF/data/countries.xml", COUNTRIES_XML)
        .with("/META-INF/data/states.xml", STATES_XML)
        .with("/META-INF/data/BR/cities-SP.xml", SP_CITIES_XML)
        .with("/META-INF/data/BR/cities-RJ.xml", RJ_CITIES_XML)
        .with("/META-INF/data/BR/cities-SC.xml", SC_CITIES_XML)
}

pub fn alice_settings() -> SeedSettings {
    SeedSettings {
        state_file: Some("states.xml".to_string()),
        default_country: Some("BR".to_string()),
        root_entity_alias: "ACME".to_string(),
        root_principal: Some("alice@example.com".to_string()),
        root_first_name: Some("Alice".to_string()),
        root_last_name: Some("Doe".to_string()),
        root_entity_state_code: Some("SP".to_string()),
        root_entity_city_code: Some("3550308".to_string()),
        initial_secret: Some("changeme".to_string()),
        ..SeedSettings::default()
    }
}

pub fn deps(store: &Arc<MemoryStore>, resources: MemoryResourceLoader) -> InstallerDeps {
    InstallerDeps {
        operators: store.clone(),
        countries: store.clone(),
        states: store.clone(),
        cities: store.clone(),
        identities: store.clone(),
        entities: store.clone(),
        identity_crypto: Arc::new(Argon2IdentityCrypto::new(store.clone())),
        user_install: Arc::new(DefaultUserInstallService::new(store.clone(), store.clone())),
        country_parser: Arc::new(XmlCountryParser),
        state_parser: Arc::new(XmlStateParser),
        city_parser: Arc::new(XmlCityParser),
        resources: Arc::new(resources),
    }
}

pub fn installer(
    store: &Arc<MemoryStore>,
    settings: &SeedSettings,
    resources: MemoryResourceLoader,
    strategy: Arc<dyn InstallStrategy>,
) -> Installer {
    Installer::new(settings, deps(store, resources), strategy).unwrap()
}

pub fn default_installer(
    store: &Arc<MemoryStore>,
    settings: &SeedSettings,
    resources: MemoryResourceLoader,
) -> Installer {
    installer(store, settings, resources, Arc::new(DefaultInstallStrategy))
}
