//! Common test utilities for database-backed tests
//!
//! Database tests run against `ROWJSON_TEST_DATABASE_URL` and are skipped
//! when it is unset. Every test works in its own freshly named table.

#![allow(dead_code)]

use rowjson::storage::TableName;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

pub const ENV_TEST_DATABASE_URL: &str = "ROWJSON_TEST_DATABASE_URL";

/// Connect to the test database, or `None` when none is configured
pub async fn test_pool() -> Option<PgPool> {
    let url = match std::env::var(ENV_TEST_DATABASE_URL) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("{} not set, skipping database test", ENV_TEST_DATABASE_URL);
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    Some(pool)
}

pub fn unique_table() -> TableName {
    TableName::new(format!("rowjson_test_{}", uuid::Uuid::new_v4().simple()))
        .expect("generated table name is a valid identifier")
}

pub async fn drop_table(pool: &PgPool, table: &TableName) {
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
        .execute(pool)
        .await
        .expect("Failed to drop test table");
}

/// Insert one row and return its generated id
pub async fn insert_row(pool: &PgPool, table: &TableName, name: &str, phone_no: Option<&str>) -> i32 {
    sqlx::query_scalar(&format!(
        "INSERT INTO {} (name, phone_no) VALUES ($1, $2) RETURNING id",
        table
    ))
    .bind(name)
    .bind(phone_no)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test row")
}

/// Log output collected by a thread-local subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a subscriber that writes into the returned buffer until the
    /// guard is dropped
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
