//! Capability traits the orchestrator is written against.
//!
//! The Postgres implementations live in `jobsweep-db`; tests inject
//! in-memory fakes. The orchestrator never deletes or lists jobs, so the
//! surface is deliberately narrow.

use async_trait::async_trait;
use thiserror::Error;

use crate::jobs::{ScrapedJob, Source};

/// Opaque persistence failure. The orchestrator only logs store errors, so
/// the message is all it needs; the sqlx layer keeps its typed errors and
/// maps them here at the boundary.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The slice of a persisted job that reconciliation compares against.
#[derive(Debug, Clone)]
pub struct StoredJob {
    pub id: i64,
    pub title: String,
    pub company: String,
}

/// Keyed persistent collection of normalized postings.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find_by_url(&self, source_url: &str) -> Result<Option<StoredJob>, StoreError>;

    async fn create(&self, source: Source, job: &ScrapedJob) -> Result<StoredJob, StoreError>;

    /// Updates the fixed reconciliation field subset (title, company,
    /// description, level, location, salary, posted_at) of an existing row.
    async fn update(&self, id: i64, job: &ScrapedJob) -> Result<(), StoreError>;
}

/// Append-then-update log of adapter invocations.
///
/// Each run row is created in a running state and mutated exactly once more
/// to a terminal success or failure state.
#[async_trait]
pub trait RunLogStore: Send + Sync {
    /// Creates a log row with status `running` and returns its id.
    async fn create_running(&self, source: Source) -> Result<i64, StoreError>;

    /// Marks the row `success` and records counts and the end time.
    async fn complete(&self, id: i64, jobs_found: i32, jobs_added: i32)
        -> Result<(), StoreError>;

    /// Marks the row `failed` and records the error and the end time.
    async fn fail(&self, id: i64, error: &str) -> Result<(), StoreError>;
}
