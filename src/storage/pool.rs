use crate::config::Config;
use crate::error::BenchResult;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Open the connection pool described by `config`.
///
/// Statement logging stays on only when `echo` is set; the statements are
/// emitted under the `sqlx::query` tracing target.
pub async fn connect(config: &Config) -> BenchResult<PgPool> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if !config.echo {
        options = options.disable_statement_logging();
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(pool)
}
