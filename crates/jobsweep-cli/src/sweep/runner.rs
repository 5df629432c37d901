//! Sequential sweep orchestration.
//!
//! Adapters run one at a time in configuration order with a pause between
//! them; together with the per-target delays inside each adapter this is the
//! pipeline's entire anti-blocking posture, so nothing here may parallelize.
//! A failure in one source is recorded and must never abort the others.

use std::sync::Arc;

use jobsweep_core::{JobStore, RunLogStore, ScrapedJob, ScraperResult, Source, StoreError};
use jobsweep_scraper::JobSource;

pub struct Orchestrator {
    adapters: Vec<Box<dyn JobSource>>,
    jobs: Arc<dyn JobStore>,
    logs: Arc<dyn RunLogStore>,
    inter_source_delay_ms: u64,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        adapters: Vec<Box<dyn JobSource>>,
        jobs: Arc<dyn JobStore>,
        logs: Arc<dyn RunLogStore>,
        inter_source_delay_ms: u64,
    ) -> Self {
        Self {
            adapters,
            jobs,
            logs,
            inter_source_delay_ms,
        }
    }

    /// Runs every adapter in order and returns one result per adapter,
    /// in the same order. Always runs to completion.
    pub async fn run_all(&self) -> Vec<ScraperResult> {
        let mut results = Vec::with_capacity(self.adapters.len());

        for (index, adapter) in self.adapters.iter().enumerate() {
            if index > 0 && self.inter_source_delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.inter_source_delay_ms))
                    .await;
            }
            results.push(self.run_source(adapter.as_ref()).await);
        }

        results
    }

    /// Runs one adapter under a scraping log: create the `running` row,
    /// scrape, persist, then write exactly one terminal log state.
    ///
    /// Scrape errors surface as a `failed` log and a `success: false` result;
    /// they are never propagated. Terminal log updates are best-effort: a
    /// log-store hiccup after a completed scrape should not turn a good run
    /// into a failed one.
    pub async fn run_source(&self, adapter: &dyn JobSource) -> ScraperResult {
        let source = adapter.source();

        let log_id = match self.logs.create_running(source).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(%source, error = %e, "could not create scraping log");
                return ScraperResult::failure(source, format!("could not create scraping log: {e}"));
            }
        };

        tracing::info!(%source, "starting scrape");

        match adapter.scrape().await {
            Ok(jobs) => {
                let jobs_found = i64::try_from(jobs.len()).unwrap_or(i64::MAX);
                tracing::info!(%source, jobs_found, "scrape finished");

                let jobs_added = self.save_jobs(source, &jobs).await;

                if let Err(e) = self
                    .logs
                    .complete(log_id, clamp_count(jobs_found), clamp_count(jobs_added))
                    .await
                {
                    tracing::warn!(%source, error = %e, "could not mark scraping log as success");
                }

                tracing::info!(%source, jobs_added, "sweep of source complete");
                ScraperResult::success(source, jobs_found, jobs_added)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(%source, error = %message, "scrape failed");

                if let Err(log_err) = self.logs.fail(log_id, &message).await {
                    tracing::warn!(%source, error = %log_err, "could not mark scraping log as failed");
                }

                ScraperResult::failure(source, message)
            }
        }
    }

    /// Reconciles each candidate against the job store, returning the number
    /// of net-new rows. Per-item failures are logged and skipped; a bad
    /// candidate never aborts the rest of the batch.
    async fn save_jobs(&self, source: Source, jobs: &[ScrapedJob]) -> i64 {
        let mut added: i64 = 0;

        for job in jobs {
            match self.reconcile(source, job).await {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(
                        %source,
                        title = %job.title,
                        url = %job.source_url,
                        error = %e,
                        "could not persist candidate; continuing"
                    );
                }
            }
        }

        added
    }

    /// Returns `Ok(true)` when a new row was created, `Ok(false)` for a
    /// refresh or a no-op.
    async fn reconcile(&self, source: Source, job: &ScrapedJob) -> Result<bool, StoreError> {
        match self.jobs.find_by_url(&job.source_url).await? {
            None => {
                self.jobs.create(source, job).await?;
                Ok(true)
            }
            Some(existing) => {
                // A refresh, not a new posting: update in place, don't count it.
                if existing.title != job.title || existing.company != job.company {
                    self.jobs.update(existing.id, job).await?;
                }
                Ok(false)
            }
        }
    }
}

fn clamp_count(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
