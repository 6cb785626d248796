mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::*;
use seed_core::domain::Identity;
use seed_core::error::DomainError;
use seed_core::repositories::IdentityRepository;
use seed_core::services::{DefaultInstallStrategy, FnInstallStrategy, Installer, SeedOutcome};
use seed_infrastructure::{MemoryResourceLoader, MemoryStore};
use seed_security::SecretHasher;
use seed_shared::config::SeedSettings;

fn seeded(outcome: SeedOutcome) -> seed_core::services::SeedReport {
    match outcome {
        SeedOutcome::Seeded(report) => *report,
        SeedOutcome::AlreadySeeded { context } => panic!("{} was already seeded", context),
    }
}

#[tokio::test]
async fn test_first_boot_creates_root_records() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), full_resources());

    let report = seeded(installer.ensure_seeded().await.unwrap());

    assert_eq!(report.context.name, "DEFAULT");
    assert_eq!(report.root_identity.principal, "alice@example.com");
    assert_eq!(report.root_identity.display_name, "Alice");
    assert_eq!(report.root_identity.personal_data.last_name, "Doe");
    assert!(report.identity_created);
    assert_eq!(report.root_entity.alias, "ACME");
    assert_eq!(report.root_entity.operator_id, report.context.id);
    assert_eq!(report.root_entity.city_id, Some(report.root_city.id));
    assert_eq!(report.root_user.entity_id, report.root_entity.id);
    assert_eq!(report.root_user.identity_id, report.root_identity.id);
    assert_eq!(report.root_city.city_code, "3550308");
    assert!(report.city_warnings.is_empty());
    assert!(report.generated_secret.is_none());

    assert_eq!(store.users().await.len(), 1);
    assert_eq!(store.entities().await.len(), 1);
}

#[tokio::test]
async fn test_second_run_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), full_resources());

    installer.ensure_seeded().await.unwrap();
    let writes_after_first = store.write_count();

    let outcome = installer.ensure_seeded().await.unwrap();

    assert!(matches!(outcome, SeedOutcome::AlreadySeeded { .. }));
    assert_eq!(store.write_count(), writes_after_first);
    assert_eq!(store.operators().await.len(), 1);
    assert_eq!(store.identities().await.len(), 1);
    assert_eq!(store.entities().await.len(), 1);
    assert_eq!(store.users().await.len(), 1);
}

#[tokio::test]
async fn test_reference_codes_stored_once_per_context() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), full_resources());

    let report = seeded(installer.ensure_seeded().await.unwrap());

    let countries = store.countries().await;
    let mut codes: Vec<_> = countries.iter().map(|c| c.country_code.as_str()).collect();
    codes.sort();
    assert_eq!(codes, vec!["BR", "PT"]);
    assert_eq!(report.countries_saved, 3);

    assert_eq!(store.states().await.len(), 3);
    assert_eq!(store.cities().await.len(), 4);
    assert_eq!(report.cities_saved, 4);
    assert!(store.cities().await.iter().all(|c| c.operator_id == report.context.id));
}

#[tokio::test]
async fn test_unknown_root_state_aborts_before_root_records() {
    let store = Arc::new(MemoryStore::new());
    let settings = SeedSettings {
        root_entity_state_code: Some("XX".to_string()),
        ..alice_settings()
    };
    let installer = default_installer(&store, &settings, full_resources());

    let result = installer.ensure_seeded().await;

    assert!(matches!(result, Err(DomainError::StateNotFound(code)) if code == "XX"));
    assert!(store.identities().await.is_empty());
    assert!(store.entities().await.is_empty());
    assert!(store.users().await.is_empty());
    // No rollback: the context stays behind.
    assert_eq!(store.operators().await.len(), 1);
}

#[tokio::test]
async fn test_missing_city_file_is_tolerated() {
    let store = Arc::new(MemoryStore::new());
    let resources = MemoryResourceLoader::new()
        .with("/META-INF/data/countries.xml", COUNTRIES_XML)
        .with("/META-INF/data/states.xml", STATES_XML)
        .with("/META-INF/data/BR/cities-SP.xml", SP_CITIES_XML)
        .with("/META-INF/data/BR/cities-SC.xml", "<cities><city");
    let installer = default_installer(&store, &alice_settings(), resources);

    let report = seeded(installer.ensure_seeded().await.unwrap());

    assert_eq!(report.root_city.city_code, "3550308");
    let mut skipped: Vec<_> = report.city_warnings.iter().map(|w| w.state_code.as_str()).collect();
    skipped.sort();
    assert_eq!(skipped, vec!["RJ", "SC"]);
    let rj = report.city_warnings.iter().find(|w| w.state_code == "RJ").unwrap();
    assert_eq!(rj.resource, "/META-INF/data/BR/cities-RJ.xml");
    assert_eq!(store.cities().await.len(), 2);
    assert_eq!(store.users().await.len(), 1);
}

#[tokio::test]
async fn test_root_city_missing_from_loaded_files_fails() {
    let store = Arc::new(MemoryStore::new());
    let resources = MemoryResourceLoader::new()
        .with("/META-INF/data/countries.xml", COUNTRIES_XML)
        .with("/META-INF/data/states.xml", STATES_XML)
        .with("/META-INF/data/BR/cities-RJ.xml", RJ_CITIES_XML);
    let installer = default_installer(&store, &alice_settings(), resources);

    let result = installer.ensure_seeded().await;

    assert!(matches!(result, Err(DomainError::CityNotFound(code)) if code == "3550308"));
    assert!(store.identities().await.is_empty());
}

#[tokio::test]
async fn test_missing_country_file_is_fatal() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), MemoryResourceLoader::new());

    let result = installer.ensure_seeded().await;

    assert!(matches!(
        result,
        Err(DomainError::ResourceNotFound(path)) if path == "/META-INF/data/countries.xml"
    ));
}

#[tokio::test]
async fn test_existing_identity_is_reused() {
    let store = Arc::new(MemoryStore::new());
    let existing = Identity::new("alice@example.com", "Al", "Alice", "Doe").unwrap();
    IdentityRepository::create(store.as_ref(), &existing).await.unwrap();

    let installer = default_installer(&store, &alice_settings(), full_resources());
    let report = seeded(installer.ensure_seeded().await.unwrap());

    assert!(!report.identity_created);
    assert_eq!(report.root_identity.id, existing.id);
    assert_eq!(report.root_user.identity_id, existing.id);
    assert_eq!(store.identities().await.len(), 1);
    assert!(store.secrets().await.is_empty());
}

#[tokio::test]
async fn test_new_identity_gets_verifiable_secret() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), full_resources());

    let report = seeded(installer.ensure_seeded().await.unwrap());

    let secrets = store.secrets().await;
    assert_eq!(secrets.len(), 1);
    assert_eq!(secrets[0].identity_id, report.root_identity.id);
    assert!(!secrets[0].expired);
    assert!(SecretHasher::verify("changeme", &secrets[0].secret_hash).unwrap());
}

#[tokio::test]
async fn test_generated_secret_is_reported() {
    let store = Arc::new(MemoryStore::new());
    let settings = SeedSettings {
        initial_secret: None,
        ..alice_settings()
    };
    let installer = default_installer(&store, &settings, full_resources());

    let report = seeded(installer.ensure_seeded().await.unwrap());

    let generated = report.generated_secret.expect("generated secret");
    let secrets = store.secrets().await;
    assert!(SecretHasher::verify(&generated, &secrets[0].secret_hash).unwrap());
}

#[tokio::test]
async fn test_run_once_receives_root_records() {
    let store = Arc::new(MemoryStore::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(None));

    let (calls_hook, seen_hook) = (calls.clone(), seen.clone());
    let strategy = FnInstallStrategy::new(move |context, entity, user| {
        calls_hook.fetch_add(1, Ordering::SeqCst);
        *seen_hook.lock().unwrap() = Some((context.id, entity.id, user.id));
        Ok(())
    });

    let installer = installer(&store, &alice_settings(), full_resources(), Arc::new(strategy));
    let report = seeded(installer.ensure_seeded().await.unwrap());
    installer.ensure_seeded().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *seen.lock().unwrap(),
        Some((report.context.id, report.root_entity.id, report.root_user.id))
    );
}

#[tokio::test]
async fn test_strategy_supplies_country_and_state_file() {
    let store = Arc::new(MemoryStore::new());
    let resources = MemoryResourceLoader::new()
        .with("/META-INF/data/countries.xml", COUNTRIES_XML)
        .with("/META-INF/data/br-states.xml", STATES_XML)
        .with("/META-INF/data/BR/cities-SP.xml", SP_CITIES_XML);
    let settings = SeedSettings {
        state_file: None,
        default_country: None,
        ..alice_settings()
    };
    let strategy = FnInstallStrategy::new(|_, _, _| Ok(()))
        .with_default_country("BR")
        .with_default_state_file("br-states.xml");

    let installer = installer(&store, &settings, resources, Arc::new(strategy));
    let report = seeded(installer.ensure_seeded().await.unwrap());

    assert_eq!(report.country.country_code, "BR");
    assert_eq!(report.states_saved, 3);
}

#[tokio::test]
async fn test_install_entity_finds_existing_alias() {
    let store = Arc::new(MemoryStore::new());
    let installer = default_installer(&store, &alice_settings(), full_resources());
    let report = seeded(installer.ensure_seeded().await.unwrap());

    let prototype = Installer::create_prototype("ACME", "Another summary", 'A');
    let entity = installer.install_entity(&report.context, &prototype).await.unwrap();

    assert_eq!(entity.id, report.root_entity.id);
    assert_eq!(store.entities().await.len(), 1);
}

#[tokio::test]
async fn test_long_first_name_seeds_with_bounded_display_name() {
    let store = Arc::new(MemoryStore::new());
    let settings = SeedSettings {
        root_first_name: Some("Maria Aparecida da Conceição Souza".to_string()),
        ..alice_settings()
    };
    let installer = default_installer(&store, &settings, full_resources());

    let report = seeded(installer.ensure_seeded().await.unwrap());

    assert_eq!(report.root_identity.display_name, "Maria Aparecida da Conceição Sou");
    assert_eq!(
        report.root_identity.personal_data.first_name,
        "Maria Aparecida da Conceição Souza"
    );
    assert_eq!(store.users().await.len(), 1);
}

#[tokio::test]
async fn test_oversized_name_fails_before_any_write() {
    let store = Arc::new(MemoryStore::new());
    let settings = SeedSettings {
        root_first_name: Some("a".repeat(65)),
        ..alice_settings()
    };

    let result = Installer::new(
        &settings,
        deps(&store, full_resources()),
        Arc::new(DefaultInstallStrategy),
    );

    assert!(matches!(
        result.err(),
        Some(DomainError::InvalidProperty { name, .. }) if name == "seed.root_first_name"
    ));
    assert_eq!(store.write_count(), 0);
    assert!(store.operators().await.is_empty());
}
