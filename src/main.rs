use clap::Parser;
use rowjson::{Config, SchemaValidationMode};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rowjson")]
#[command(about = "Compare JSON serialization of plain and schema-validated PostgreSQL rows", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./rowjson.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// PostgreSQL connection URL
    #[arg(long)]
    database_url: Option<String>,

    /// Table holding the user rows
    #[arg(long)]
    table: Option<String>,

    /// Rows fetched by each query path
    #[arg(short, long)]
    limit: Option<u32>,

    /// Insert synthetic rows before benchmarking
    #[arg(long)]
    seed: bool,

    /// Rows inserted when seeding
    #[arg(long)]
    seed_rows: Option<u32>,

    /// Fixed RNG seed for reproducible seeding
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Timed runs per path (the report uses the mean)
    #[arg(long)]
    samples: Option<u32>,

    /// Discarded runs per path before sampling
    #[arg(long)]
    warmup: Option<u32>,

    /// Schema enforcement for validated records: strict, lenient or off
    #[arg(long)]
    validation: Option<SchemaValidationMode>,

    /// Connection pool size
    #[arg(long)]
    max_connections: Option<u32>,

    /// Log every executed SQL statement
    #[arg(long)]
    echo: bool,
}

impl Args {
    /// Command-line flags take precedence over file and environment settings
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        if let Some(table) = self.table {
            config.table = table;
        }
        if let Some(limit) = self.limit {
            config.row_limit = limit;
        }
        if self.seed {
            config.seed = true;
        }
        if let Some(rows) = self.seed_rows {
            config.seed_rows = rows;
        }
        if self.rng_seed.is_some() {
            config.rng_seed = self.rng_seed;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(warmup) = self.warmup {
            config.warmup = warmup;
        }
        if let Some(mode) = self.validation {
            config.validation = mode;
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        if self.echo {
            config.echo = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Initialize logging; stdout is reserved for the report
    let default_filter = if config.echo {
        "rowjson=info,sqlx::query=debug"
    } else {
        "rowjson=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        table = %config.table,
        limit = config.row_limit,
        validation = %config.validation,
        seed = config.seed,
        "Starting serialization benchmark"
    );

    let report = rowjson::run(&config).await?;
    report.print()?;

    Ok(())
}
