//! The two measured query paths.
//!
//! Each path runs the same `ORDER BY id LIMIT n` query and then times only
//! the step that turns the in-memory rows into JSON text. Query time is never
//! part of a measurement.

use crate::error::BenchResult;
use crate::model::{User, UserSchemas, ValidatedUser, ValidatedUsers};
use crate::report::BenchReport;
use crate::storage::{fetch_users, TableName};
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Which serialization approach a timing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Plain records through `serde_json`
    Plain,
    /// Schema-validated records through the list wrapper export
    Validated,
}

impl PathKind {
    pub fn label(&self) -> &'static str {
        match self {
            PathKind::Plain => "plain records",
            PathKind::Validated => "validated records",
        }
    }
}

/// Outcome of one run of a query path
#[derive(Debug, Clone)]
pub struct PathTiming {
    pub rows: usize,
    /// Serialization time only
    pub elapsed: Duration,
    pub json: String,
}

/// Encode plain records to a JSON byte buffer, then decode it as UTF-8 text
pub fn encode_plain(users: &[User]) -> BenchResult<String> {
    let bytes = serde_json::to_vec(users)?;
    Ok(String::from_utf8(bytes)?)
}

/// Wrap validated records in the list model and export it as JSON.
///
/// No schema runs here: the records were checked when they were built.
pub fn encode_validated(users: Vec<ValidatedUser>) -> BenchResult<String> {
    ValidatedUsers::new(users).dump_json()
}

/// Run `f` and measure how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

pub async fn run_plain(pool: &PgPool, table: &TableName, limit: u32) -> BenchResult<PathTiming> {
    let users = fetch_users(pool, table, limit).await?;
    let rows = users.len();

    let (json, elapsed) = timed(|| encode_plain(&users));
    let json = json?;

    tracing::debug!(rows, elapsed_us = elapsed.as_micros() as u64, "Plain path done");
    Ok(PathTiming {
        rows,
        elapsed,
        json,
    })
}

pub async fn run_validated(
    pool: &PgPool,
    table: &TableName,
    limit: u32,
    schemas: &UserSchemas,
) -> BenchResult<PathTiming> {
    let users = fetch_users(pool, table, limit)
        .await?
        .into_iter()
        .map(|user| ValidatedUser::from_record(user, schemas))
        .collect::<BenchResult<Vec<_>>>()?;
    let rows = users.len();

    let (json, elapsed) = timed(|| encode_validated(users));
    let json = json?;

    tracing::debug!(
        rows,
        elapsed_us = elapsed.as_micros() as u64,
        mode = %schemas.mode(),
        "Validated path done"
    );
    Ok(PathTiming {
        rows,
        elapsed,
        json,
    })
}

/// How many times to run each path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    pub warmup: u32,
    pub samples: u32,
}

impl Default for SamplePlan {
    fn default() -> Self {
        Self {
            warmup: 0,
            samples: 1,
        }
    }
}

/// Run both paths according to `plan` and collect their timings.
///
/// Each round runs the plain path first, then the validated path.
pub async fn run_benchmark(
    pool: &PgPool,
    table: &TableName,
    limit: u32,
    schemas: &UserSchemas,
    plan: SamplePlan,
) -> BenchResult<BenchReport> {
    for round in 0..plan.warmup {
        run_plain(pool, table, limit).await?;
        run_validated(pool, table, limit, schemas).await?;
        tracing::debug!(round, "Warm-up round done");
    }

    let mut report = BenchReport::new();
    for round in 0..plan.samples {
        let plain = run_plain(pool, table, limit).await?;
        let validated = run_validated(pool, table, limit, schemas).await?;
        tracing::debug!(round, "Sample round done");
        report.add_round(&plain, &validated);
    }

    tracing::info!(
        samples = plan.samples,
        warmup = plan.warmup,
        rows = report.rows,
        "Benchmark finished"
    );
    Ok(report)
}
