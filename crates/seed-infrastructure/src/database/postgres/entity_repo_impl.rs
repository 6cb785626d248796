// ============================================================================
// Seed Infrastructure - PostgreSQL Entity Repository
// File: crates/seed-infrastructure/src/database/postgres/entity_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use seed_core::domain::Entity;
use seed_core::error::DomainError;
use seed_core::repositories::EntityRepository;
use seed_shared::constants::DEFAULT_ENTITY_TYPE;

use super::db_error;

pub struct PgEntityRepository {
    pool: PgPool,
}

impl PgEntityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EntityRow {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub alias: String,
    pub summary: String,
    pub entity_type: String,
    pub city_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<EntityRow> for Entity {
    fn from(row: EntityRow) -> Self {
        Entity {
            id: row.id,
            operator_id: row.operator_id,
            alias: row.alias,
            summary: row.summary,
            entity_type: row.entity_type.chars().next().unwrap_or(DEFAULT_ENTITY_TYPE),
            city_id: row.city_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl EntityRepository for PgEntityRepository {
    async fn find_by_operator_and_alias(
        &self,
        operator_id: &Uuid,
        alias: &str,
    ) -> Result<Option<Entity>, DomainError> {
        let row: Option<EntityRow> = sqlx::query_as(
            r#"
            SELECT id, operator_id, alias, summary, entity_type, city_id, created_at
            FROM entities
            WHERE operator_id = $1 AND alias = $2
            "#
        )
        .bind(operator_id)
        .bind(alias)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding entity by alias"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, entity: &Entity) -> Result<Entity, DomainError> {
        let row: EntityRow = sqlx::query_as(
            r#"
            INSERT INTO entities (id, operator_id, alias, summary, entity_type, city_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, operator_id, alias, summary, entity_type, city_id, created_at
            "#
        )
        .bind(entity.id)
        .bind(entity.operator_id)
        .bind(&entity.alias)
        .bind(&entity.summary)
        .bind(entity.entity_type.to_string())
        .bind(entity.city_id)
        .bind(entity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating entity"))?;

        Ok(row.into())
    }
}
