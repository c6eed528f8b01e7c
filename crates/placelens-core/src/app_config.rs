use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub log_level: String,
    /// Optional YAML override for the search cascade; `None` means the
    /// built-in default cascade.
    pub tiers_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub max_concurrent_resolutions: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_model", &self.gemini_model)
            .field("log_level", &self.log_level)
            .field("tiers_path", &self.tiers_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field(
                "max_concurrent_resolutions",
                &self.max_concurrent_resolutions,
            )
            .finish()
    }
}
