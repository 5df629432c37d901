/// Process-wide configuration, loaded from environment variables.
///
/// See [`crate::config::load_app_config`] for the loading path and defaults.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Per-request timeout for page fetches. Sources are slow; keep this generous.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between search targets within one adapter. Load-bearing: this is
    /// the pipeline's only defense against anti-scraping blocks.
    pub inter_target_delay_ms: u64,
    /// JobsDB tolerates a slightly tighter pace than the other sources.
    pub jobsdb_delay_ms: u64,
    /// Pause between adapters during a full sweep.
    pub inter_source_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_target_delay_ms", &self.inter_target_delay_ms)
            .field("jobsdb_delay_ms", &self.jobsdb_delay_ms)
            .field("inter_source_delay_ms", &self.inter_source_delay_ms)
            .finish()
    }
}
