// ============================================================================
// Seed Infrastructure - In-memory Store
// File: crates/seed-infrastructure/src/database/memory/mod.rs
// ============================================================================
//! One store implementing every repository trait, with the same natural-key
//! uniqueness as the PostgreSQL schema. Counts inserted rows.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use seed_core::domain::{City, Country, Entity, Identity, IdentitySecret, Operator, State, User};
use seed_core::error::DomainError;
use seed_core::repositories::{
    CityRepository, CountryRepository, EntityRepository, IdentityRepository,
    IdentitySecretRepository, OperatorRepository, StateRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    operators: Vec<Operator>,
    countries: Vec<Country>,
    states: Vec<State>,
    cities: Vec<City>,
    identities: Vec<Identity>,
    secrets: Vec<IdentitySecret>,
    entities: Vec<Entity>,
    users: Vec<User>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    writes: AtomicUsize,
}

/// Operator names compare like `LOWER(name)` in the schema's unique index.
fn same_operator_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn duplicate(table: &str, key: String) -> DomainError {
    DomainError::DatabaseError(format!("duplicate key in {}: {}", table, key))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows inserted so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn operators(&self) -> Vec<Operator> {
        self.tables.read().await.operators.clone()
    }

    pub async fn countries(&self) -> Vec<Country> {
        self.tables.read().await.countries.clone()
    }

    pub async fn states(&self) -> Vec<State> {
        self.tables.read().await.states.clone()
    }

    pub async fn cities(&self) -> Vec<City> {
        self.tables.read().await.cities.clone()
    }

    pub async fn identities(&self) -> Vec<Identity> {
        self.tables.read().await.identities.clone()
    }

    pub async fn secrets(&self) -> Vec<IdentitySecret> {
        self.tables.read().await.secrets.clone()
    }

    pub async fn entities(&self) -> Vec<Entity> {
        self.tables.read().await.entities.clone()
    }

    pub async fn users(&self) -> Vec<User> {
        self.tables.read().await.users.clone()
    }
}

/// Inserts each record whose key is absent; returns the stored record per input.
fn upsert_all<T: Clone>(
    table: &mut Vec<T>,
    records: Vec<T>,
    same_key: impl Fn(&T, &T) -> bool,
    on_insert: impl Fn(),
) -> Vec<T> {
    let mut managed = Vec::with_capacity(records.len());
    for record in records {
        match table.iter().find(|stored| same_key(stored, &record)) {
            Some(stored) => managed.push(stored.clone()),
            None => {
                table.push(record.clone());
                on_insert();
                managed.push(record);
            }
        }
    }
    managed
}

#[async_trait]
impl OperatorRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Operator>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.operators.iter().find(|o| same_operator_name(&o.name, name)).cloned())
    }

    async fn create(&self, operator: &Operator) -> Result<Operator, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.operators.iter().any(|o| same_operator_name(&o.name, &operator.name)) {
            return Err(duplicate("operators", operator.name.clone()));
        }
        tables.operators.push(operator.clone());
        self.record_write();
        Ok(operator.clone())
    }
}

#[async_trait]
impl CountryRepository for MemoryStore {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        country_code: &str,
    ) -> Result<Option<Country>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .countries
            .iter()
            .find(|c| c.operator_id == *operator_id && c.country_code == country_code)
            .cloned())
    }

    async fn save_all(&self, countries: Vec<Country>) -> Result<Vec<Country>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(upsert_all(
            &mut tables.countries,
            countries,
            |a, b| a.operator_id == b.operator_id && a.country_code == b.country_code,
            || self.record_write(),
        ))
    }
}

#[async_trait]
impl StateRepository for MemoryStore {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        state_code: &str,
    ) -> Result<Option<State>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .states
            .iter()
            .find(|s| s.operator_id == *operator_id && s.state_code == state_code)
            .cloned())
    }

    async fn save_all(&self, states: Vec<State>) -> Result<Vec<State>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(upsert_all(
            &mut tables.states,
            states,
            |a, b| a.operator_id == b.operator_id && a.state_code == b.state_code,
            || self.record_write(),
        ))
    }
}

#[async_trait]
impl CityRepository for MemoryStore {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        city_code: &str,
    ) -> Result<Option<City>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .cities
            .iter()
            .find(|c| c.operator_id == *operator_id && c.city_code == city_code)
            .cloned())
    }

    async fn save_all(&self, cities: Vec<City>) -> Result<Vec<City>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(upsert_all(
            &mut tables.cities,
            cities,
            |a, b| a.operator_id == b.operator_id && a.city_code == b.city_code,
            || self.record_write(),
        ))
    }
}

#[async_trait]
impl IdentityRepository for MemoryStore {
    async fn find_by_principal(&self, principal: &str) -> Result<Option<Identity>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.identities.iter().find(|i| i.principal == principal).cloned())
    }

    async fn create(&self, identity: &Identity) -> Result<Identity, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.identities.iter().any(|i| i.principal == identity.principal) {
            return Err(duplicate("identities", identity.principal.clone()));
        }
        tables.identities.push(identity.clone());
        self.record_write();
        Ok(identity.clone())
    }
}

#[async_trait]
impl IdentitySecretRepository for MemoryStore {
    async fn find_by_identity(
        &self,
        identity_id: &Uuid,
    ) -> Result<Option<IdentitySecret>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.secrets.iter().find(|s| s.identity_id == *identity_id).cloned())
    }

    async fn create(&self, secret: &IdentitySecret) -> Result<IdentitySecret, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.secrets.iter().any(|s| s.identity_id == secret.identity_id) {
            return Err(duplicate("identity_secrets", secret.identity_id.to_string()));
        }
        tables.secrets.push(secret.clone());
        self.record_write();
        Ok(secret.clone())
    }
}

#[async_trait]
impl EntityRepository for MemoryStore {
    async fn find_by_operator_and_alias(
        &self,
        operator_id: &Uuid,
        alias: &str,
    ) -> Result<Option<Entity>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .entities
            .iter()
            .find(|e| e.operator_id == *operator_id && e.alias == alias)
            .cloned())
    }

    async fn create(&self, entity: &Entity) -> Result<Entity, DomainError> {
        let mut tables = self.tables.write().await;
        let taken = tables
            .entities
            .iter()
            .any(|e| e.operator_id == entity.operator_id && e.alias == entity.alias);
        if taken {
            return Err(duplicate("entities", entity.alias.clone()));
        }
        tables.entities.push(entity.clone());
        self.record_write();
        Ok(entity.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_entity_and_identity(
        &self,
        entity_id: &Uuid,
        identity_id: &Uuid,
    ) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.entity_id == *entity_id && u.identity_id == *identity_id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        let taken = tables
            .users
            .iter()
            .any(|u| u.entity_id == user.entity_id && u.identity_id == user.identity_id);
        if taken {
            return Err(duplicate("users", user.user_key.clone()));
        }
        tables.users.push(user.clone());
        self.record_write();
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_all_stores_each_code_once() {
        let store = MemoryStore::new();
        let ctx = Operator::new("DEFAULT").unwrap();
        let first = Country::new(&ctx, "BR", "Brasil");
        let first_id = first.id;

        let countries = vec![
            first,
            Country::new(&ctx, "BR", "Brazil"),
            Country::new(&ctx, "PT", "Portugal"),
        ];
        let managed = CountryRepository::save_all(&store, countries).await.unwrap();

        assert_eq!(managed.len(), 3);
        assert_eq!(managed[1].id, first_id);
        assert_eq!(store.countries().await.len(), 2);
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_codes_are_scoped_per_operator() {
        let store = MemoryStore::new();
        let a = Operator::new("A").unwrap();
        let b = Operator::new("B").unwrap();

        let countries = vec![Country::new(&a, "BR", "Brasil"), Country::new(&b, "BR", "Brasil")];
        CountryRepository::save_all(&store, countries).await.unwrap();

        assert_eq!(store.countries().await.len(), 2);
        let found = CountryRepository::find_by_operator_and_code(&store, &b.id, "BR")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.operator_id, b.id);
    }

    #[tokio::test]
    async fn test_duplicate_operator_rejected() {
        let store = MemoryStore::new();
        OperatorRepository::create(&store, &Operator::new("DEFAULT").unwrap()).await.unwrap();
        let result = OperatorRepository::create(&store, &Operator::new("DEFAULT").unwrap()).await;
        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_operator_name_matches_ignoring_non_ascii_case() {
        let store = MemoryStore::new();
        let created = Operator::new("ÁGUA").unwrap();
        OperatorRepository::create(&store, &created).await.unwrap();

        let found = OperatorRepository::find_by_name(&store, "água").await.unwrap();
        assert_eq!(found.map(|o| o.id), Some(created.id));

        let result = OperatorRepository::create(&store, &Operator::new("Água").unwrap()).await;
        assert!(matches!(result, Err(DomainError::DatabaseError(_))));
    }
}
