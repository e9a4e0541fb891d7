use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, BaseEntity, Result};
use crate::modules::employees::models::{Employee, Gender};

const ORIGIN: &str = "EmployeeRepository";
const DUPLICATE_MSG: &str = "an employee with this email or document number already exists";

/// Persistence boundary for employees
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> Result<()>;

    async fn list_by_workspace_id_and_tenant_id(
        &self,
        workspace_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Vec<Employee>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Employee>;

    async fn update(&self, employee: &Employee) -> Result<()>;

    /// Soft delete; `NOT_FOUND` when no live row matches
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Uniqueness checks skip the `excluding` row so an update can keep its
    /// own key under a different case
    async fn exists_by_tenant_id_and_doc_number(
        &self,
        tenant_id: Uuid,
        doc_number: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool>;

    async fn exists_by_tenant_id_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool>;
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, tenant_id, workspace_id, first_name, last_name, email, address,
           doc_type_id, doc_number, birth_date, gender, phone,
           created_at, updated_at, deleted_at
    FROM employees
"#;

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    tenant_id: Uuid,
    workspace_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    address: String,
    doc_type_id: Uuid,
    doc_number: String,
    birth_date: Option<NaiveDate>,
    gender: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self> {
        let gender = row
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()
            .map_err(AppError::Internal)?;

        Ok(Employee {
            base: BaseEntity::restore(row.id, row.created_at, row.updated_at, row.deleted_at),
            tenant_id: row.tenant_id,
            workspace_id: row.workspace_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            address: row.address,
            doc_type_id: row.doc_type_id,
            doc_number: row.doc_number,
            birth_date: row.birth_date,
            gender,
            phone: row.phone,
        })
    }
}

/// MySQL-backed employee repository
#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn create(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, tenant_id, workspace_id, first_name, last_name, email, address,
                doc_type_id, doc_number, birth_date, gender, phone, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.base.id)
        .bind(employee.tenant_id)
        .bind(employee.workspace_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.address)
        .bind(employee.doc_type_id)
        .bind(&employee.doc_number)
        .bind(employee.birth_date)
        .bind(employee.gender.map(|g| g.as_str()))
        .bind(&employee.phone)
        .bind(employee.base.created_at)
        .bind(employee.base.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, DUPLICATE_MSG))?;

        Ok(())
    }

    async fn list_by_workspace_id_and_tenant_id(
        &self,
        workspace_id: Uuid,
        tenant_id: Uuid,
    ) -> Result<Vec<Employee>> {
        let sql = format!(
            "{} WHERE workspace_id = ? AND tenant_id = ? AND deleted_at IS NULL ORDER BY last_name, first_name",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(workspace_id)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Employee> {
        let sql = format!("{} WHERE id = ? AND deleted_at IS NULL", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(ORIGIN, "Employee not found"))?;

        Employee::try_from(row)
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = ?, last_name = ?, email = ?, address = ?,
                doc_type_id = ?, doc_number = ?, birth_date = ?, gender = ?, phone = ?,
                updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.address)
        .bind(employee.doc_type_id)
        .bind(&employee.doc_number)
        .bind(employee.birth_date)
        .bind(employee.gender.map(|g| g.as_str()))
        .bind(&employee.phone)
        .bind(employee.base.updated_at)
        .bind(employee.base.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, DUPLICATE_MSG))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Employee not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE employees SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Employee not found"));
        }
        Ok(())
    }

    async fn exists_by_tenant_id_and_doc_number(
        &self,
        tenant_id: Uuid,
        doc_number: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM employees
            WHERE tenant_id = ? AND doc_number = ? AND deleted_at IS NULL
              AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(tenant_id)
        .bind(doc_number)
        .bind(excluding)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn exists_by_tenant_id_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM employees
            WHERE tenant_id = ? AND email = ? AND deleted_at IS NULL
              AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(tenant_id)
        .bind(email)
        .bind(excluding)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
