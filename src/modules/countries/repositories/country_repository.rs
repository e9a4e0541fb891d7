use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, BaseEntity, Result};
use crate::modules::countries::models::Country;

const ORIGIN: &str = "CountryRepository";

/// Persistence boundary for countries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn create(&self, country: &Country) -> Result<()>;

    async fn update(&self, country: &Country) -> Result<()>;

    /// Soft delete; `NOT_FOUND` when no live row matches
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Live row with `code` (collation rules apply), other than `excluding`
    async fn exists_by_code(&self, code: &str, excluding: Option<Uuid>) -> Result<bool>;

    async fn get_by_id(&self, id: Uuid) -> Result<Country>;

    async fn get_by_code(&self, code: &str) -> Result<Country>;

    async fn list_all(&self) -> Result<Vec<Country>>;
}

#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    id: Uuid,
    code: String,
    name: String,
    coin_code: String,
    coin_symbol: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country {
            base: BaseEntity::restore(row.id, row.created_at, row.updated_at, row.deleted_at),
            code: row.code,
            name: row.name,
            coin_code: row.coin_code,
            coin_symbol: row.coin_symbol,
        }
    }
}

/// MySQL-backed country repository
#[derive(Clone)]
pub struct MySqlCountryRepository {
    pool: MySqlPool,
}

impl MySqlCountryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for MySqlCountryRepository {
    async fn create(&self, country: &Country) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO countries (
                id, code, name, coin_code, coin_symbol, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(country.base.id)
        .bind(&country.code)
        .bind(&country.name)
        .bind(&country.coin_code)
        .bind(&country.coin_symbol)
        .bind(country.base.created_at)
        .bind(country.base.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, "A country with this code already exists"))?;

        Ok(())
    }

    async fn update(&self, country: &Country) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE countries
            SET code = ?, name = ?, coin_code = ?, coin_symbol = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&country.code)
        .bind(&country.name)
        .bind(&country.coin_code)
        .bind(&country.coin_symbol)
        .bind(country.base.updated_at)
        .bind(country.base.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, ORIGIN, "A country with this code already exists"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Country not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE countries SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(ORIGIN, "Country not found"));
        }
        Ok(())
    }

    async fn exists_by_code(&self, code: &str, excluding: Option<Uuid>) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM countries
            WHERE code = ? AND deleted_at IS NULL AND (? IS NULL OR id <> ?)
            "#,
        )
        .bind(code)
        .bind(excluding)
        .bind(excluding)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Country> {
        sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, code, name, coin_code, coin_symbol, created_at, updated_at, deleted_at
            FROM countries
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Country::from)
        .ok_or_else(|| AppError::not_found(ORIGIN, "Country not found"))
    }

    async fn get_by_code(&self, code: &str) -> Result<Country> {
        sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, code, name, coin_code, coin_symbol, created_at, updated_at, deleted_at
            FROM countries
            WHERE code = ? AND deleted_at IS NULL
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?
        .map(Country::from)
        .ok_or_else(|| AppError::not_found(ORIGIN, "Country not found"))
    }

    async fn list_all(&self) -> Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r#"
            SELECT id, code, name, coin_code, coin_symbol, created_at, updated_at, deleted_at
            FROM countries
            WHERE deleted_at IS NULL
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }
}
