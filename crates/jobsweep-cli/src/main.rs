mod sweep;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobsweep")]
#[command(about = "Junior tech job aggregation pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the scraping sweep across all sources (or one with --source)
    Sweep {
        /// Restrict the sweep to a single source (linkedin, jobsdb, jobthai)
        #[arg(long)]
        source: Option<String>,

        /// Print the per-source results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show recent scraping run logs
    Logs {
        /// Maximum number of log rows to show
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = jobsweep_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let pool = jobsweep_db::connect_pool(
        &config.database_url,
        jobsweep_db::PoolConfig::from_app_config(&config),
    )
    .await?;

    match cli.command {
        Commands::Sweep { source, json } => {
            sweep::run_sweep(&pool, &config, source.as_deref(), json).await?;
        }
        Commands::Logs { limit } => {
            print_logs(&pool, limit).await?;
        }
        Commands::Migrate => {
            jobsweep_db::run_migrations(&pool).await?;
            println!("migrations up to date");
        }
    }

    Ok(())
}

async fn print_logs(pool: &sqlx::PgPool, limit: i64) -> anyhow::Result<()> {
    let logs = jobsweep_db::list_scraping_logs(pool, limit).await?;
    if logs.is_empty() {
        println!("no scraping runs recorded yet");
        return Ok(());
    }

    for log in logs {
        let ended = log
            .ended_at
            .map_or_else(|| "-".to_string(), |t| t.to_rfc3339());
        let error = log.error.as_deref().unwrap_or("");
        println!(
            "{:<10} {:<8} found={:<5} added={:<5} started={} ended={} {error}",
            log.source,
            log.status,
            log.jobs_found,
            log.jobs_added,
            log.started_at.to_rfc3339(),
            ended,
        );
    }
    Ok(())
}
