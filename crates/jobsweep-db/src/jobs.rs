//! Database operations for the `jobs` table.
//!
//! The scraping core only ever creates a job when its `source_url` is absent
//! and refreshes a fixed field subset when it recurs; it never deletes or
//! lists. Query surfaces for the web layer live elsewhere.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use jobsweep_core::{ScrapedJob, Source};

use crate::DbError;

/// A row from the `jobs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub level: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub source: String,
    pub source_url: String,
    pub posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const JOB_COLUMNS: &str = "id, title, company, description, level, location, salary, \
                           source, source_url, posted_at, created_at, updated_at";

/// Looks up a persisted job by its canonical listing URL.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_job_by_url(pool: &PgPool, source_url: &str) -> Result<Option<JobRow>, DbError> {
    let row = sqlx::query_as::<_, JobRow>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE source_url = $1"
    ))
    .bind(source_url)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Inserts a new job row for a candidate with a previously unseen URL.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails, including a unique
/// violation on `source_url`, which the caller treats as a per-item error.
pub async fn create_job(pool: &PgPool, source: Source, job: &ScrapedJob) -> Result<JobRow, DbError> {
    let row = sqlx::query_as::<_, JobRow>(&format!(
        "INSERT INTO jobs (title, company, description, level, location, salary, source, source_url, posted_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {JOB_COLUMNS}"
    ))
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.description)
    .bind(job.level.as_str())
    .bind(&job.location)
    .bind(&job.salary)
    .bind(source.as_str())
    .bind(&job.source_url)
    .bind(job.posted_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Refreshes the fixed reconciliation field subset of an existing row.
///
/// `source` and `source_url` are identity and are never rewritten.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row exists with the given `id`, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn update_job_fields(pool: &PgPool, id: i64, job: &ScrapedJob) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE jobs \
         SET title = $1, company = $2, description = $3, level = $4, \
             location = $5, salary = $6, posted_at = $7, updated_at = NOW() \
         WHERE id = $8",
    )
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.description)
    .bind(job.level.as_str())
    .bind(&job.location)
    .bind(&job.salary)
    .bind(job.posted_at)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
