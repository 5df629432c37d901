use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        database_url: require("DATABASE_URL")?,
        log_level: or_default("JOBSWEEP_LOG_LEVEL", "info"),
        db_max_connections: parse_u32("JOBSWEEP_DB_MAX_CONNECTIONS", "10")?,
        db_min_connections: parse_u32("JOBSWEEP_DB_MIN_CONNECTIONS", "1")?,
        db_acquire_timeout_secs: parse_u64("JOBSWEEP_DB_ACQUIRE_TIMEOUT_SECS", "10")?,
        request_timeout_secs: parse_u64("JOBSWEEP_REQUEST_TIMEOUT_SECS", "30")?,
        user_agent: or_default("JOBSWEEP_USER_AGENT", DEFAULT_USER_AGENT),
        inter_target_delay_ms: parse_u64("JOBSWEEP_INTER_TARGET_DELAY_MS", "2000")?,
        jobsdb_delay_ms: parse_u64("JOBSWEEP_JOBSDB_DELAY_MS", "1500")?,
        inter_source_delay_ms: parse_u64("JOBSWEEP_INTER_SOURCE_DELAY_MS", "3000")?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
