pub mod app_config;
pub mod config;
pub mod geo;
pub mod place;
pub mod tiers;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{Coordinate, LocationSignal, SignalSource};
pub use place::{BusinessGuess, Candidate, PlaceDetails, Review, ReviewSummary, Sentiment};
pub use tiers::{default_cascade, load_tiers, SearchStrategy, SearchTier};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read tiers file at {path}: {source}")]
    TiersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tiers file: {0}")]
    TiersFileParse(#[from] serde_yaml::Error),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
