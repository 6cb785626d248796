// ============================================================================
// Seed Infrastructure - PostgreSQL Reference Data Repositories
// File: crates/seed-infrastructure/src/database/postgres/location_repo_impl.rs
// ============================================================================
//! `save_all` runs in one transaction: `ON CONFLICT DO NOTHING` per record,
//! then reads back the stored row for its natural key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use seed_core::domain::{City, Country, State};
use seed_core::error::DomainError;
use seed_core::repositories::{CityRepository, CountryRepository, StateRepository};

use super::db_error;

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CountryRow {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub country_code: String,
    pub country_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country {
            id: row.id,
            operator_id: row.operator_id,
            country_code: row.country_code,
            country_name: row.country_name,
            created_at: row.created_at,
        }
    }
}

const SELECT_COUNTRY: &str = r#"
    SELECT id, operator_id, country_code, country_name, created_at
    FROM countries
    WHERE operator_id = $1 AND country_code = $2
"#;

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        country_code: &str,
    ) -> Result<Option<Country>, DomainError> {
        let row: Option<CountryRow> = sqlx::query_as(SELECT_COUNTRY)
            .bind(operator_id)
            .bind(country_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding country by code"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn save_all(&self, countries: Vec<Country>) -> Result<Vec<Country>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("starting country transaction"))?;
        let mut managed = Vec::with_capacity(countries.len());

        for country in &countries {
            sqlx::query(
                r#"
                INSERT INTO countries (id, operator_id, country_code, country_name, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (operator_id, country_code) DO NOTHING
                "#
            )
            .bind(country.id)
            .bind(country.operator_id)
            .bind(&country.country_code)
            .bind(&country.country_name)
            .bind(country.created_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("saving country"))?;

            let row: CountryRow = sqlx::query_as(SELECT_COUNTRY)
                .bind(country.operator_id)
                .bind(&country.country_code)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_error("reading saved country"))?;
            managed.push(row.into());
        }

        tx.commit().await.map_err(db_error("committing countries"))?;
        Ok(managed)
    }
}

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

pub struct PgStateRepository {
    pool: PgPool,
}

impl PgStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StateRow {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub country_id: Uuid,
    pub state_code: String,
    pub state_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<StateRow> for State {
    fn from(row: StateRow) -> Self {
        State {
            id: row.id,
            operator_id: row.operator_id,
            country_id: row.country_id,
            state_code: row.state_code,
            state_name: row.state_name,
            created_at: row.created_at,
        }
    }
}

const SELECT_STATE: &str = r#"
    SELECT id, operator_id, country_id, state_code, state_name, created_at
    FROM states
    WHERE operator_id = $1 AND state_code = $2
"#;

#[async_trait]
impl StateRepository for PgStateRepository {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        state_code: &str,
    ) -> Result<Option<State>, DomainError> {
        let row: Option<StateRow> = sqlx::query_as(SELECT_STATE)
            .bind(operator_id)
            .bind(state_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding state by code"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn save_all(&self, states: Vec<State>) -> Result<Vec<State>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("starting state transaction"))?;
        let mut managed = Vec::with_capacity(states.len());

        for state in &states {
            sqlx::query(
                r#"
                INSERT INTO states (id, operator_id, country_id, state_code, state_name, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (operator_id, state_code) DO NOTHING
                "#
            )
            .bind(state.id)
            .bind(state.operator_id)
            .bind(state.country_id)
            .bind(&state.state_code)
            .bind(&state.state_name)
            .bind(state.created_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("saving state"))?;

            let row: StateRow = sqlx::query_as(SELECT_STATE)
                .bind(state.operator_id)
                .bind(&state.state_code)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_error("reading saved state"))?;
            managed.push(row.into());
        }

        tx.commit().await.map_err(db_error("committing states"))?;
        Ok(managed)
    }
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CityRow {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub state_id: Uuid,
    pub city_code: String,
    pub city_name: String,
    pub is_capital: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CityRow> for City {
    fn from(row: CityRow) -> Self {
        City {
            id: row.id,
            operator_id: row.operator_id,
            state_id: row.state_id,
            city_code: row.city_code,
            city_name: row.city_name,
            is_capital: row.is_capital,
            created_at: row.created_at,
        }
    }
}

const SELECT_CITY: &str = r#"
    SELECT id, operator_id, state_id, city_code, city_name, is_capital, created_at
    FROM cities
    WHERE operator_id = $1 AND city_code = $2
"#;

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn find_by_operator_and_code(
        &self,
        operator_id: &Uuid,
        city_code: &str,
    ) -> Result<Option<City>, DomainError> {
        let row: Option<CityRow> = sqlx::query_as(SELECT_CITY)
            .bind(operator_id)
            .bind(city_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding city by code"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn save_all(&self, cities: Vec<City>) -> Result<Vec<City>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("starting city transaction"))?;
        let mut managed = Vec::with_capacity(cities.len());

        for city in &cities {
            sqlx::query(
                r#"
                INSERT INTO cities
                    (id, operator_id, state_id, city_code, city_name, is_capital, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (operator_id, city_code) DO NOTHING
                "#
            )
            .bind(city.id)
            .bind(city.operator_id)
            .bind(city.state_id)
            .bind(&city.city_code)
            .bind(&city.city_name)
            .bind(city.is_capital)
            .bind(city.created_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("saving city"))?;

            let row: CityRow = sqlx::query_as(SELECT_CITY)
                .bind(city.operator_id)
                .bind(&city.city_code)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_error("reading saved city"))?;
            managed.push(row.into());
        }

        tx.commit().await.map_err(db_error("committing cities"))?;
        Ok(managed)
    }
}
