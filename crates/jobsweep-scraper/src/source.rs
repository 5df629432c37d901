//! The adapter capability the orchestrator sequences.

use async_trait::async_trait;

use jobsweep_core::{ScrapedJob, Source};

use crate::error::ScrapeError;

/// One external job site.
///
/// `scrape` must swallow per-target failures (a dead page or a markup change
/// on one search target is logged and skipped) and return whatever the
/// remaining targets produced, an empty list when everything failed. The
/// `Err` branch is reserved for adapter-fatal conditions and is handled at
/// the orchestrator boundary, where it becomes a failed run log without
/// touching the other sources.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn source(&self) -> Source;

    /// Produces the deduplicated, screened candidate list for this source.
    ///
    /// # Errors
    ///
    /// Only adapter-fatal conditions; never per-target fetch/parse failures.
    async fn scrape(&self) -> Result<Vec<ScrapedJob>, ScrapeError>;
}
