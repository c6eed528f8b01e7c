use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Provider radius ceiling in meters.
const MAX_RADIUS_METERS: u32 = 50_000;

/// How a single search tier queries the place provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Nearby search constrained by the business category type.
    NearbyTyped,
    /// Nearby search by keyword only, no type constraint.
    NearbyGeneric,
    /// Free-text search biased toward the capture location.
    TextWithBias,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::NearbyTyped => write!(f, "nearby_typed"),
            SearchStrategy::NearbyGeneric => write!(f, "nearby_generic"),
            SearchStrategy::TextWithBias => write!(f, "text_with_bias"),
        }
    }
}

/// One rung of the search cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTier {
    pub strategy: SearchStrategy,
    /// Required for nearby strategies; optional bias for text search.
    pub radius_meters: Option<u32>,
}

impl SearchTier {
    /// Whether this tier passes the classifier's category to the provider.
    #[must_use]
    pub fn uses_business_type(&self) -> bool {
        matches!(self.strategy, SearchStrategy::NearbyTyped)
    }
}

#[derive(Debug, Deserialize)]
pub struct TiersFile {
    pub tiers: Vec<SearchTier>,
}

/// The built-in cascade: two typed nearby passes widening from 50 m to
/// 150 m, an untyped nearby pass at 100 m, then a location-biased text
/// search as the last resort.
#[must_use]
pub fn default_cascade() -> Vec<SearchTier> {
    vec![
        SearchTier {
            strategy: SearchStrategy::NearbyTyped,
            radius_meters: Some(50),
        },
        SearchTier {
            strategy: SearchStrategy::NearbyTyped,
            radius_meters: Some(150),
        },
        SearchTier {
            strategy: SearchStrategy::NearbyGeneric,
            radius_meters: Some(100),
        },
        SearchTier {
            strategy: SearchStrategy::TextWithBias,
            radius_meters: None,
        },
    ]
}

/// Load and validate a cascade override from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_tiers(path: &Path) -> Result<TiersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TiersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let tiers_file: TiersFile =
        serde_yaml::from_str(&content).map_err(ConfigError::TiersFileParse)?;

    validate_tiers(&tiers_file)?;

    Ok(tiers_file)
}

fn validate_tiers(tiers_file: &TiersFile) -> Result<(), ConfigError> {
    if tiers_file.tiers.is_empty() {
        return Err(ConfigError::Validation(
            "tier list must contain at least one tier".to_string(),
        ));
    }

    for (index, tier) in tiers_file.tiers.iter().enumerate() {
        match tier.strategy {
            SearchStrategy::NearbyTyped | SearchStrategy::NearbyGeneric => {
                let Some(radius) = tier.radius_meters else {
                    return Err(ConfigError::Validation(format!(
                        "tier {index} ({}) requires radius_meters",
                        tier.strategy
                    )));
                };
                if radius == 0 || radius > MAX_RADIUS_METERS {
                    return Err(ConfigError::Validation(format!(
                        "tier {index} has radius {radius}; must be between 1 and {MAX_RADIUS_METERS}"
                    )));
                }
            }
            SearchStrategy::TextWithBias => {
                if let Some(radius) = tier.radius_meters {
                    if radius == 0 || radius > MAX_RADIUS_METERS {
                        return Err(ConfigError::Validation(format!(
                            "tier {index} has radius {radius}; must be between 1 and {MAX_RADIUS_METERS}"
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}
