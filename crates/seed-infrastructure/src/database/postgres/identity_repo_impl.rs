// ============================================================================
// Seed Infrastructure - PostgreSQL Identity Repositories
// File: crates/seed-infrastructure/src/database/postgres/identity_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use seed_core::domain::{Identity, IdentitySecret, PersonalData};
use seed_core::error::DomainError;
use seed_core::repositories::{IdentityRepository, IdentitySecretRepository};

use super::db_error;

pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct IdentityRow {
    pub id: Uuid,
    pub principal: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<IdentityRow> for Identity {
    fn from(row: IdentityRow) -> Self {
        Identity {
            id: row.id,
            principal: row.principal,
            display_name: row.display_name,
            personal_data: PersonalData {
                first_name: row.first_name,
                last_name: row.last_name,
            },
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl IdentityRepository for PgIdentityRepository {
    async fn find_by_principal(&self, principal: &str) -> Result<Option<Identity>, DomainError> {
        let row: Option<IdentityRow> = sqlx::query_as(
            r#"
            SELECT id, principal, display_name, first_name, last_name, created_at
            FROM identities
            WHERE principal = $1
            "#
        )
        .bind(principal)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding identity by principal"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, identity: &Identity) -> Result<Identity, DomainError> {
        let row: IdentityRow = sqlx::query_as(
            r#"
            INSERT INTO identities (id, principal, display_name, first_name, last_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, principal, display_name, first_name, last_name, created_at
            "#
        )
        .bind(identity.id)
        .bind(&identity.principal)
        .bind(&identity.display_name)
        .bind(&identity.personal_data.first_name)
        .bind(&identity.personal_data.last_name)
        .bind(identity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating identity"))?;

        Ok(row.into())
    }
}

pub struct PgIdentitySecretRepository {
    pool: PgPool,
}

impl PgIdentitySecretRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IdentitySecretRow {
    pub id: Uuid,
    pub identity_id: Uuid,
    pub secret_hash: String,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

impl From<IdentitySecretRow> for IdentitySecret {
    fn from(row: IdentitySecretRow) -> Self {
        IdentitySecret {
            id: row.id,
            identity_id: row.identity_id,
            secret_hash: row.secret_hash,
            expired: row.expired,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl IdentitySecretRepository for PgIdentitySecretRepository {
    async fn find_by_identity(
        &self,
        identity_id: &Uuid,
    ) -> Result<Option<IdentitySecret>, DomainError> {
        let row: Option<IdentitySecretRow> = sqlx::query_as(
            r#"
            SELECT id, identity_id, secret_hash, expired, created_at
            FROM identity_secrets
            WHERE identity_id = $1
            "#
        )
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding identity secret"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, secret: &IdentitySecret) -> Result<IdentitySecret, DomainError> {
        let row: IdentitySecretRow = sqlx::query_as(
            r#"
            INSERT INTO identity_secrets (id, identity_id, secret_hash, expired, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, identity_id, secret_hash, expired, created_at
            "#
        )
        .bind(secret.id)
        .bind(secret.identity_id)
        .bind(&secret.secret_hash)
        .bind(secret.expired)
        .bind(secret.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating identity secret"))?;

        Ok(row.into())
    }
}
