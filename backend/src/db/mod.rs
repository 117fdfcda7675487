//! Database connection and pool management
//!
//! The `expenses` table is created on startup when missing. Its shape is not
//! versioned.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;

/// Database connection error
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    ConnectionError(String),

    #[error("Failed to prepare schema: {0}")]
    SchemaError(String),

    #[error("Database health check failed: {0}")]
    HealthCheckError(String),
}

const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id          UUID PRIMARY KEY,
    description TEXT NOT NULL,
    amount      DOUBLE PRECISION NOT NULL,
    date        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    category    TEXT,
    recurring   BOOLEAN NOT NULL DEFAULT FALSE,
    frequency   TEXT,
    notes       TEXT
)
"#;

/// Create a database connection pool
pub async fn create_pool(config: &Config) -> Result<PgPool, DbError> {
    tracing::info!("Connecting to database at {}", config.database_url_masked());

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect(&config.database_url)
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

/// Create the `expenses` table if it does not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(CREATE_EXPENSES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaError(e.to_string()))?;

    tracing::info!("Expenses table ready");

    Ok(())
}

/// Check database connectivity (for health checks)
pub async fn check_health(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| DbError::HealthCheckError(e.to_string()))?;

    Ok(())
}
