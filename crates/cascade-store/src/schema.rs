//! Schema definitions and creation utilities.
//!
//! The schema SQL is embedded at compile time and applied once at connect
//! time, never on the request hot path.

use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};

/// Embedded schema SQL (001_schema.sql).
pub const SCHEMA_SQL: &str = include_str!("../../../migrations/001_schema.sql");

/// Apply the embedded schema to the database.
///
/// This function is idempotent - every statement guards with
/// `IF NOT EXISTS`, so it can be run on each startup safely.
pub async fn ensure_schema(pool: &SqlitePool) -> StoreResult<()> {
    tracing::debug!("Applying schema (001_schema.sql)...");

    sqlx::raw_sql(SCHEMA_SQL)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema(format!("schema creation failed: {}", e)))?;

    tracing::info!("Schema ready");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `events` table exists.
pub async fn is_schema_initialized(pool: &SqlitePool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = 'events'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
