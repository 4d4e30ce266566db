use std::path::PathBuf;

/// Runtime configuration, loaded from `STOREFINDER_*` environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Overpass API interpreter endpoint.
    pub overpass_url: String,
    /// Nominatim base URL for free-text geocoding.
    pub nominatim_url: String,
    /// Base URL of the external logo search service.
    pub logo_search_url: String,
    /// API credential for the logo search service; `None` disables that
    /// resolution tier without error.
    pub gemini_api_key: Option<String>,
    /// Path of the persisted brand → logo URL mapping.
    pub logo_cache_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_logo_lookups: usize,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("overpass_url", &self.overpass_url)
            .field("nominatim_url", &self.nominatim_url)
            .field("logo_search_url", &self.logo_search_url)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("logo_cache_path", &self.logo_cache_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "max_concurrent_logo_lookups",
                &self.max_concurrent_logo_lookups,
            )
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .finish()
    }
}
