// ============================================================================
// Seed Infrastructure - PostgreSQL User Repository
// File: crates/seed-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use seed_core::domain::User;
use seed_core::error::DomainError;
use seed_core::repositories::UserRepository;

use super::db_error;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub entity_id: Uuid,
    pub identity_id: Uuid,
    pub user_key: String,
    pub user_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            entity_id: row.entity_id,
            identity_id: row.identity_id,
            user_key: row.user_key,
            user_name: row.user_name,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_entity_and_identity(
        &self,
        entity_id: &Uuid,
        identity_id: &Uuid,
    ) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, entity_id, identity_id, user_key, user_name, is_active, created_at
            FROM users
            WHERE entity_id = $1 AND identity_id = $2
            "#
        )
        .bind(entity_id)
        .bind(identity_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users
                (id, entity_id, identity_id, user_key, user_name, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, entity_id, identity_id, user_key, user_name, is_active, created_at
            "#
        )
        .bind(user.id)
        .bind(user.entity_id)
        .bind(user.identity_id)
        .bind(&user.user_key)
        .bind(&user.user_name)
        .bind(user.is_active)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating user"))?;

        Ok(row.into())
    }
}
