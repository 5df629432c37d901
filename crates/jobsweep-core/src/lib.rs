pub mod app_config;
pub mod config;
pub mod dedupe;
pub mod jobs;
pub mod screen;
pub mod store;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use dedupe::dedupe_jobs;
pub use jobs::{JobLevel, ScrapedJob, ScraperResult, Source};
pub use screen::{Screener, TieBreak};
pub use store::{JobStore, RunLogStore, StoreError, StoredJob};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
