//! Offline unit tests for jobsweep-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::Utc;
use jobsweep_core::{AppConfig, ScrapedJob};
use jobsweep_db::{JobRow, PoolConfig, ScrapingLogRow};
use uuid::Uuid;

fn test_app_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://example".to_string(),
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        request_timeout_secs: 30,
        user_agent: "ua".to_string(),
        inter_target_delay_ms: 2000,
        jobsdb_delay_ms: 1500,
        inter_source_delay_ms: 3000,
    }
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let pool_config = PoolConfig::from_app_config(&test_app_config());
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_defaults_are_conservative() {
    let pool_config = PoolConfig::default();
    assert_eq!(pool_config.max_connections, 10);
    assert_eq!(pool_config.min_connections, 1);
    assert_eq!(pool_config.acquire_timeout_secs, 10);
}

/// Compile-time smoke test: confirm that [`JobRow`] carries every field the
/// reconciliation path reads and writes. No database required.
#[test]
fn job_row_has_expected_fields() {
    let row = JobRow {
        id: 1_i64,
        title: "Junior Developer".to_string(),
        company: "Acme".to_string(),
        description: None,
        level: "junior".to_string(),
        location: Some("Bangkok".to_string()),
        salary: None,
        source: "jobsdb".to_string(),
        source_url: "https://th.jobsdb.com/job/1".to_string(),
        posted_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    assert_eq!(row.id, 1);
    assert_eq!(row.level, "junior");
    assert_eq!(row.source, "jobsdb");
    assert!(row.posted_at.is_none());
}

/// Compile-time smoke test for [`ScrapingLogRow`]'s append-then-update shape.
#[test]
fn scraping_log_row_has_expected_fields() {
    let row = ScrapingLogRow {
        id: 1_i64,
        public_id: Uuid::new_v4(),
        source: "linkedin".to_string(),
        status: "running".to_string(),
        jobs_found: 0_i32,
        jobs_added: 0_i32,
        error: None,
        started_at: Utc::now(),
        ended_at: None,
        created_at: Utc::now(),
    };

    assert_eq!(row.status, "running");
    assert!(row.ended_at.is_none());
    assert!(row.error.is_none());
}

#[test]
fn scraped_job_optionals_map_to_nullable_columns() {
    let job = ScrapedJob::new("Junior Developer", "Acme", "https://x/1");
    // Every optional on the ephemeral type has a nullable column behind it.
    assert!(job.description.is_none());
    assert!(job.location.is_none());
    assert!(job.salary.is_none());
    assert!(job.posted_at.is_none());
}
