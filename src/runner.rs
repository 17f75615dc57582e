use crate::bench::{run_benchmark, SamplePlan};
use crate::config::Config;
use crate::error::BenchResult;
use crate::model::UserSchemas;
use crate::report::BenchReport;
use crate::storage::{connect, ensure_schema, seed_users};
use sqlx::PgPool;

/// Full benchmark run: connect, set up, optionally seed, measure.
///
/// The pool is closed before returning, whether or not the run succeeded.
pub async fn run(config: &Config) -> BenchResult<BenchReport> {
    config.validate()?;
    let schemas = UserSchemas::compile(config.validation)?;

    let pool = connect(config).await?;
    let result = run_with_pool(&pool, config, &schemas).await;
    pool.close().await;
    tracing::debug!("Connection pool closed");

    result
}

pub async fn run_with_pool(
    pool: &PgPool,
    config: &Config,
    schemas: &UserSchemas,
) -> BenchResult<BenchReport> {
    let table = config.table_name()?;
    ensure_schema(pool, &table).await;

    if config.seed {
        seed_users(pool, &table, config.seed_rows as usize, config.rng_seed).await?;
    }

    let plan = SamplePlan {
        warmup: config.warmup,
        samples: config.samples,
    };
    run_benchmark(pool, &table, config.row_limit, schemas, plan).await
}
