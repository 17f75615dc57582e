//! Table setup
//!
//! `create_schema` is the strict form. `ensure_schema` is what the benchmark
//! runs at startup: it never fails, but a setup error is logged instead of
//! disappearing.

use super::table::TableName;
use crate::error::BenchResult;
use crate::model::{NAME_MAX_LEN, PHONE_MAX_LEN};
use sqlx::PgPool;

pub fn create_table_sql(table: &TableName) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
            id SERIAL PRIMARY KEY, \
            name VARCHAR({}) NOT NULL, \
            phone_no VARCHAR({})\
        )",
        table, NAME_MAX_LEN, PHONE_MAX_LEN
    )
}

/// Create the users table if it doesn't exist yet
pub async fn create_schema(pool: &PgPool, table: &TableName) -> BenchResult<()> {
    sqlx::query(&create_table_sql(table)).execute(pool).await?;
    Ok(())
}

/// Best-effort `create_schema`; errors are logged and swallowed
pub async fn ensure_schema(pool: &PgPool, table: &TableName) {
    match create_schema(pool, table).await {
        Ok(()) => tracing::debug!(table = %table, "Schema ready"),
        Err(e) => tracing::warn!(
            table = %table,
            error = %e,
            "Schema setup failed, continuing without it"
        ),
    }
}
