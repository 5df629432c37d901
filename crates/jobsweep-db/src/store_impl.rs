//! Postgres-backed implementations of the core store capabilities.
//!
//! Thin adapters from the orchestrator-facing traits to the typed query
//! functions in this crate. Typed [`crate::DbError`]s are flattened into
//! [`StoreError`] messages at this boundary.

use async_trait::async_trait;
use sqlx::PgPool;

use jobsweep_core::{JobStore, RunLogStore, ScrapedJob, Source, StoreError, StoredJob};

use crate::{jobs, scraping_logs};

#[derive(Debug, Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn find_by_url(&self, source_url: &str) -> Result<Option<StoredJob>, StoreError> {
        let row = jobs::find_job_by_url(&self.pool, source_url)
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;
        Ok(row.map(|r| StoredJob {
            id: r.id,
            title: r.title,
            company: r.company,
        }))
    }

    async fn create(&self, source: Source, job: &ScrapedJob) -> Result<StoredJob, StoreError> {
        let row = jobs::create_job(&self.pool, source, job)
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;
        Ok(StoredJob {
            id: row.id,
            title: row.title,
            company: row.company,
        })
    }

    async fn update(&self, id: i64, job: &ScrapedJob) -> Result<(), StoreError> {
        jobs::update_job_fields(&self.pool, id, job)
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct PgRunLogStore {
    pool: PgPool,
}

impl PgRunLogStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunLogStore for PgRunLogStore {
    async fn create_running(&self, source: Source) -> Result<i64, StoreError> {
        let row = scraping_logs::create_scraping_log(&self.pool, source)
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;
        Ok(row.id)
    }

    async fn complete(&self, id: i64, jobs_found: i32, jobs_added: i32) -> Result<(), StoreError> {
        scraping_logs::complete_scraping_log(&self.pool, id, jobs_found, jobs_added)
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn fail(&self, id: i64, error: &str) -> Result<(), StoreError> {
        scraping_logs::fail_scraping_log(&self.pool, id, error)
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }
}
