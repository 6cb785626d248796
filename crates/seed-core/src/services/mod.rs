//! Domain services (installer and its collaborators)

pub mod installer;
pub mod installer_config;
pub mod install_strategy;
pub mod identity_crypto;
pub mod user_install_service;

pub use installer::{
    CityLoadWarning, CountryInstall, Installer, InstallerDeps, RootInstall, SeedOutcome,
    SeedReport, StateAndCityInstall,
};
pub use installer_config::{InitialSecret, InstallerConfig};
pub use install_strategy::{DefaultInstallStrategy, FnInstallStrategy, InstallStrategy};
pub use identity_crypto::IdentityCrypto;
pub use user_install_service::{DefaultUserInstallService, UserInstallService};
