use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, BaseEntity, Result};
use crate::modules::workspaces::models::{Workspace, WorkspaceStatus};

const ORIGIN: &str = "WorkspaceRepository";
const DUPLICATE_MSG: &str = "a workspace with this code already exists for the given tenant";

/// Persistence boundary for workspaces
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn create(&self, workspace: &Workspace) -> Result<()>;

    async fn get(&self, id: Uuid) -> Result<Workspace>;

    async fn update(&self, workspace: &Workspace) -> Result<()>;

    /// Soft delete; `NOT_FOUND` when no live row matches
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Live workspace of the tenant with `code`, other than `excluding`
    async fn exists_by_tenant_id_and_code(
        &self,
        tenant_id: Uuid,
        code: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool>;

    async fn list_by_tenant_id(&self, tenant_id: Uuid) -> Result<Vec<Workspace>>;
}

#[derive(Debug, sqlx::FromRow)]
struct WorkspaceRow {
    id: Uuid,
    tenant_id: Uuid,
    country_id: Uuid,
    code: String,
    name: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<WorkspaceRow> for Workspace {
    type Error = AppError;

    fn try_from(row: WorkspaceRow) -> Result<Self> {
        let status: WorkspaceStatus = row.status.parse().map_err(AppError::Internal)?;

        Ok(Workspace {
            base: BaseEntity::restore(row.id, row.created_at, row.updated_at, row.deleted_at),
            tenant_id: row.tenant_id,
            country_id: row.country_id,
            code: row.code,
            name: row.name,
            status,
        })
    }
}

/// MySQL-backed workspace repository
#[derive(Clone)]
pub struct MySqlWorkspaceRepository {
    pool: MySqlPool,
}

impl MySqlWorkspaceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceRepository for MySqlWorkspaceRepository {
    async fn create(&self, workspace: &Workspace) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workspaces (
                id, tenant_id, country_id, code, name, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(workspace.base.id)
        .bind(workspace.tenant_id)
        .bind(workspace.country_id)
        .bind(&workspace.code)
        .bind(&workspace.name)
        .bind(workspace.status.as_str())
        .bind(workspace.base.created_at)
        .bind(workspace.base.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, DUPLICATE_MSG))?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Workspace> {
        let row = sqlx::query_as::<_, WorkspaceRow>(
            r#"
            SELECT id, tenant_id, country_id, code, name, status,
                   created_at, updated_at, deleted_at
            FROM workspaces
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found(ORIGIN, "Workspace not found"))?;

        Workspace::try_from(row)
    }

    async fn update(&self, workspace: &Workspace) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE workspaces
            SET code = ?, name = ?, status = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&workspace.code)
        .bind(&workspace.name)
        .bind(workspace.status.as_str())
        .bind(workspace.base.updated_at)
        .bind(workspace.base.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, DUPLICATE_MSG))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Workspace not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE workspaces SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Workspace not found"));
        }
        Ok(())
    }

    async fn exists_by_tenant_id_and_code(
        &self,
        tenant_id: Uuid,
        code: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM workspaces
            WHERE tenant_id = ? AND code = ? AND deleted_at IS NULL
              AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(tenant_id)
        .bind(code)
        .bind(excluding)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn list_by_tenant_id(&self, tenant_id: Uuid) -> Result<Vec<Workspace>> {
        let rows = sqlx::query_as::<_, WorkspaceRow>(
            r#"
            SELECT id, tenant_id, country_id, code, name, status,
                   created_at, updated_at, deleted_at
            FROM workspaces
            WHERE tenant_id = ? AND deleted_at IS NULL
            ORDER BY code
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Workspace::try_from).collect()
    }
}
