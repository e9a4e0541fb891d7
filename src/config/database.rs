use std::env;
use std::time::Duration;

use serde::Deserialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Executor;

use super::parse_var;
use crate::core::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: parse_var("DATABASE_POOL_SIZE", 5)?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
        })
    }

    fn connect_options(&self) -> Result<MySqlConnectOptions> {
        self.url
            .parse::<MySqlConnectOptions>()
            .map_err(|e| AppError::Configuration(format!("Invalid DATABASE_URL: {}", e)))
    }

    /// Pool whose sessions run in UTC, since audit timestamps are stored
    /// without a zone
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let options = self.connect_options()?.timezone(Some("+00:00".to_string()));

        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    conn.execute("SET SESSION sql_mode = 'STRICT_ALL_TABLES'")
                        .await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;

        tracing::debug!(
            min = self.pool_size,
            max = self.max_connections,
            "MySQL pool ready"
        );
        Ok(pool)
    }

    /// Apply pending schema migrations from `migrations/`
    pub async fn migrate(pool: &MySqlPool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| AppError::Database(e.into()))
    }
}
