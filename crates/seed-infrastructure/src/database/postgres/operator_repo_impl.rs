// ============================================================================
// Seed Infrastructure - PostgreSQL Operator Repository
// File: crates/seed-infrastructure/src/database/postgres/operator_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use seed_core::domain::Operator;
use seed_core::error::DomainError;
use seed_core::repositories::OperatorRepository;

use super::db_error;

pub struct PgOperatorRepository {
    pool: PgPool,
}

impl PgOperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OperatorRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<OperatorRow> for Operator {
    fn from(row: OperatorRow) -> Self {
        Operator {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl OperatorRepository for PgOperatorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Operator>, DomainError> {
        let row: Option<OperatorRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at
            FROM operators
            WHERE LOWER(name) = LOWER($1)
            "#
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding operator by name"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, operator: &Operator) -> Result<Operator, DomainError> {
        let row: OperatorRow = sqlx::query_as(
            r#"
            INSERT INTO operators (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at
            "#
        )
        .bind(operator.id)
        .bind(&operator.name)
        .bind(operator.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating operator"))?;

        Ok(row.into())
    }
}
