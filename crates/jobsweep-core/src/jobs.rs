//! Domain types shared across the scraping pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seniority classification assigned to a posting by the screener.
///
/// Stored as lowercase strings in Postgres; `Display`/`FromStr` round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Unknown,
}

impl JobLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Junior => "junior",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown job level: {0}")]
pub struct ParseJobLevelError(String);

impl std::str::FromStr for JobLevel {
    type Err = ParseJobLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(JobLevel::Entry),
            "junior" => Ok(JobLevel::Junior),
            "mid" => Ok(JobLevel::Mid),
            "senior" => Ok(JobLevel::Senior),
            "unknown" => Ok(JobLevel::Unknown),
            other => Err(ParseJobLevelError(other.to_owned())),
        }
    }
}

/// External job-listing site an adapter pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    LinkedIn,
    JobsDb,
    JobThai,
}

impl Source {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::LinkedIn => "linkedin",
            Source::JobsDb => "jobsdb",
            Source::JobThai => "jobthai",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown source: {0}")]
pub struct ParseSourceError(String);

impl std::str::FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linkedin" => Ok(Source::LinkedIn),
            "jobsdb" => Ok(Source::JobsDb),
            "jobthai" => Ok(Source::JobThai),
            other => Err(ParseSourceError(other.to_owned())),
        }
    }
}

/// A normalized posting extracted from one source during one run.
///
/// Ephemeral: owned by the adapter invocation that produced it until handed
/// to the orchestrator, which decides persistence. `source_url` is the
/// natural key the job store reconciles against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedJob {
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub level: JobLevel,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub source_url: String,
    pub posted_at: Option<DateTime<Utc>>,
}

impl ScrapedJob {
    /// Minimal constructor for the required fields; optional fields default
    /// to `None` and level to `Unknown`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: None,
            level: JobLevel::Unknown,
            location: None,
            salary: None,
            source_url: source_url.into(),
            posted_at: None,
        }
    }
}

/// Outcome of one adapter invocation within a sweep.
///
/// `jobs_found` is the number of candidates the adapter handed to the
/// orchestrator (after intra-run dedupe); `jobs_added` is the number of
/// net-new rows created during reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct ScraperResult {
    pub source: Source,
    pub success: bool,
    pub jobs_found: i64,
    pub jobs_added: i64,
    pub error: Option<String>,
}

impl ScraperResult {
    #[must_use]
    pub fn success(source: Source, jobs_found: i64, jobs_added: i64) -> Self {
        Self {
            source,
            success: true,
            jobs_found,
            jobs_added,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(source: Source, error: impl Into<String>) -> Self {
        Self {
            source,
            success: false,
            jobs_found: 0,
            jobs_added: 0,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
#[path = "jobs_test.rs"]
mod tests;
