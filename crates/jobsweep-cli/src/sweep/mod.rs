//! The `sweep` command: wire the adapters to the Postgres stores and run.

mod runner;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::PgPool;

use jobsweep_core::{AppConfig, ScraperResult, Screener, Source};
use jobsweep_db::{PgJobStore, PgRunLogStore};
use jobsweep_scraper::{FetchClient, JobSource, JobThaiSource, JobsDbSource, LinkedInSource};

pub use runner::Orchestrator;

/// Builds the enabled adapter list in the fixed sweep order.
///
/// The order is deliberate and deterministic; a `source_filter` narrows the
/// list to one adapter rather than reordering anything.
fn build_adapters(
    config: &AppConfig,
    source_filter: Option<Source>,
) -> anyhow::Result<Vec<Box<dyn JobSource>>> {
    let fetch = FetchClient::new(config.request_timeout_secs, &config.user_agent)?;
    let screener = Screener::default();

    let all: Vec<Box<dyn JobSource>> = vec![
        Box::new(LinkedInSource::new(
            fetch.clone(),
            screener,
            config.inter_target_delay_ms,
        )),
        Box::new(JobsDbSource::new(
            fetch.clone(),
            screener,
            config.jobsdb_delay_ms,
        )),
        Box::new(JobThaiSource::new(
            fetch,
            screener,
            config.inter_target_delay_ms,
        )),
    ];

    Ok(match source_filter {
        None => all,
        Some(wanted) => all
            .into_iter()
            .filter(|adapter| adapter.source() == wanted)
            .collect(),
    })
}

/// Runs the sweep and prints a per-source summary plus totals.
///
/// # Errors
///
/// Returns an error for an unknown `--source` value or if the HTTP client
/// cannot be constructed. Per-source scrape and persistence failures are
/// reflected in the printed results, not propagated.
pub async fn run_sweep(
    pool: &PgPool,
    config: &AppConfig,
    source_filter: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let source_filter = source_filter
        .map(Source::from_str)
        .transpose()
        .map_err(|e| anyhow::anyhow!("{e}; expected one of: linkedin, jobsdb, jobthai"))?;

    let adapters = build_adapters(config, source_filter)?;
    if adapters.is_empty() {
        anyhow::bail!("no adapters enabled for this sweep");
    }

    let orchestrator = Orchestrator::new(
        adapters,
        Arc::new(PgJobStore::new(pool.clone())),
        Arc::new(PgRunLogStore::new(pool.clone())),
        config.inter_source_delay_ms,
    );

    let results = orchestrator.run_all().await;
    print_results(&results, json)?;
    Ok(())
}

fn print_results(results: &[ScraperResult], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    let mut total_found: i64 = 0;
    let mut total_added: i64 = 0;
    for result in results {
        total_found += result.jobs_found;
        total_added += result.jobs_added;
        if result.success {
            println!(
                "{:<10} ok     found={:<5} added={}",
                result.source, result.jobs_found, result.jobs_added
            );
        } else {
            println!(
                "{:<10} FAILED {}",
                result.source,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
    println!("total: found={total_found} added={total_added}");
    Ok(())
}
