use crate::app_config::AppConfig;
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
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
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let places_api_key = require("GOOGLE_PLACES_API_KEY")?;
    let gemini_api_key = require("GEMINI_API_KEY")?;

    let gemini_model = or_default("PLACELENS_GEMINI_MODEL", "gemini-2.0-flash");
    let log_level = or_default("PLACELENS_LOG_LEVEL", "info");
    let tiers_path = lookup("PLACELENS_TIERS_PATH").ok().map(PathBuf::from);

    let request_timeout_secs = parse_u64("PLACELENS_REQUEST_TIMEOUT_SECS", "10")?;
    let max_retries = parse_u32("PLACELENS_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("PLACELENS_RETRY_BACKOFF_BASE_MS", "500")?;
    let max_concurrent_resolutions = parse_usize("PLACELENS_MAX_CONCURRENT_RESOLUTIONS", "2")?;

    if max_concurrent_resolutions == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACELENS_MAX_CONCURRENT_RESOLUTIONS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        places_api_key,
        gemini_api_key,
        gemini_model,
        log_level,
        tiers_path,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        max_concurrent_resolutions,
    })
}
