use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::doc_types::models::DocType;

const ORIGIN: &str = "DocTypeRepository";

/// Read-only access to document types
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocTypeRepository: Send + Sync {
    /// True when `doc_type_id` exists and is owned by `country_id`
    async fn is_valid_for_country(&self, doc_type_id: Uuid, country_id: Uuid) -> Result<bool>;

    async fn get(&self, id: Uuid) -> Result<DocType>;

    async fn list_by_country_id(&self, country_id: Uuid) -> Result<Vec<DocType>>;
}

#[derive(Debug, sqlx::FromRow)]
struct DocTypeRow {
    id: Uuid,
    country_id: Uuid,
    code: String,
    name: String,
}

impl From<DocTypeRow> for DocType {
    fn from(row: DocTypeRow) -> Self {
        DocType {
            id: row.id,
            country_id: row.country_id,
            code: row.code,
            name: row.name,
        }
    }
}

/// MySQL-backed document type repository
#[derive(Clone)]
pub struct MySqlDocTypeRepository {
    pool: MySqlPool,
}

impl MySqlDocTypeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocTypeRepository for MySqlDocTypeRepository {
    async fn is_valid_for_country(&self, doc_type_id: Uuid, country_id: Uuid) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM doc_types WHERE id = ? AND country_id = ?",
        )
        .bind(doc_type_id)
        .bind(country_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn get(&self, id: Uuid) -> Result<DocType> {
        sqlx::query_as::<_, DocTypeRow>(
            "SELECT id, country_id, code, name FROM doc_types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(DocType::from)
        .ok_or_else(|| AppError::not_found(ORIGIN, "Document type not found"))
    }

    async fn list_by_country_id(&self, country_id: Uuid) -> Result<Vec<DocType>> {
        let rows = sqlx::query_as::<_, DocTypeRow>(
            r#"
            SELECT id, country_id, code, name
            FROM doc_types
            WHERE country_id = ?
            ORDER BY code
            "#,
        )
        .bind(country_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DocType::from).collect())
    }
}
