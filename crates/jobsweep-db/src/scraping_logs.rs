//! Database operations for the `scraping_logs` table.
//!
//! Each adapter invocation gets one row with an append-then-update
//! lifecycle: created as `running`, mutated exactly once more to `success`
//! or `failed`. The `WHERE status = 'running'` guards make a second terminal
//! update an [`DbError::InvalidLogTransition`] instead of a silent overwrite.
//! Rows are never deleted here; retention is an external concern.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use jobsweep_core::Source;

use crate::DbError;

/// A row from the `scraping_logs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScrapingLogRow {
    pub id: i64,
    pub public_id: Uuid,
    pub source: String,
    pub status: String,
    pub jobs_found: i32,
    pub jobs_added: i32,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

const LOG_COLUMNS: &str = "id, public_id, source, status, jobs_found, jobs_added, error, \
                           started_at, ended_at, created_at";

/// Creates a new scraping log in `running` status with `started_at = NOW()`.
///
/// Generates a UUID in Rust and binds it to `public_id`. Returns the full
/// newly-created row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn create_scraping_log(pool: &PgPool, source: Source) -> Result<ScrapingLogRow, DbError> {
    let public_id = Uuid::new_v4();

    let row = sqlx::query_as::<_, ScrapingLogRow>(&format!(
        "INSERT INTO scraping_logs (public_id, source, status, started_at) \
         VALUES ($1, $2, 'running', NOW()) \
         RETURNING {LOG_COLUMNS}"
    ))
    .bind(public_id)
    .bind(source.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Marks a log as `success`, sets `ended_at = NOW()` and the run counts.
///
/// # Errors
///
/// Returns [`DbError::InvalidLogTransition`] if the row is not `running`, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn complete_scraping_log(
    pool: &PgPool,
    id: i64,
    jobs_found: i32,
    jobs_added: i32,
) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE scraping_logs \
         SET status = 'success', jobs_found = $1, jobs_added = $2, ended_at = NOW() \
         WHERE id = $3 AND status = 'running'",
    )
    .bind(jobs_found)
    .bind(jobs_added)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidLogTransition {
            id,
            expected_status: "running",
        });
    }

    Ok(())
}

/// Marks a log as `failed`, sets `ended_at = NOW()` and the error message.
///
/// # Errors
///
/// Returns [`DbError::InvalidLogTransition`] if the row is not `running`, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn fail_scraping_log(pool: &PgPool, id: i64, error: &str) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE scraping_logs \
         SET status = 'failed', error = $1, ended_at = NOW() \
         WHERE id = $2 AND status = 'running'",
    )
    .bind(error)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::InvalidLogTransition {
            id,
            expected_status: "running",
        });
    }

    Ok(())
}

/// Returns the most recent `limit` log rows, ordered by `created_at DESC`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_scraping_logs(pool: &PgPool, limit: i64) -> Result<Vec<ScrapingLogRow>, DbError> {
    let rows = sqlx::query_as::<_, ScrapingLogRow>(&format!(
        "SELECT {LOG_COLUMNS} FROM scraping_logs \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
