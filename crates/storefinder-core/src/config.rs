use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed. No variable is
/// required: every setting has a default and the external-lookup credential
/// is optional.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The core parsing logic is decoupled from the actual environment so it can
/// be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("STOREFINDER_LOG_LEVEL", "info");
    let overpass_url = or_default(
        "STOREFINDER_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let nominatim_url = or_default(
        "STOREFINDER_NOMINATIM_URL",
        "https://nominatim.openstreetmap.org",
    );
    let logo_search_url = or_default(
        "STOREFINDER_LOGO_SEARCH_URL",
        "https://generativelanguage.googleapis.com",
    );
    let gemini_api_key = lookup("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    let logo_cache_path = PathBuf::from(or_default(
        "STOREFINDER_LOGO_CACHE_PATH",
        "./hardware_brand_logos_v1.json",
    ));

    let request_timeout_secs = parse_u64("STOREFINDER_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "STOREFINDER_USER_AGENT",
        "storefinder/0.1 (hardware-store-locator)",
    );
    let max_concurrent_logo_lookups =
        parse_usize("STOREFINDER_MAX_CONCURRENT_LOGO_LOOKUPS", "4")?;
    let max_retries = parse_u32("STOREFINDER_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("STOREFINDER_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        log_level,
        overpass_url,
        nominatim_url,
        logo_search_url,
        gemini_api_key,
        logo_cache_path,
        request_timeout_secs,
        user_agent,
        max_concurrent_logo_lookups,
        max_retries,
        retry_backoff_base_secs,
    })
}
