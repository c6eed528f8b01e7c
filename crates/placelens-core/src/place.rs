use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// What the vision model believes the photographed storefront is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessGuess {
    /// Business name as read from signage.
    pub name: String,
    /// Business category, e.g. "cafe" or "hardware store".
    pub category: String,
    /// Short free-text description of the storefront.
    #[serde(default)]
    pub description: Option<String>,
    /// Address-like text visible in the photo itself, if any.
    #[serde(default)]
    pub location_text: Option<String>,
}

/// One place returned by a search tier, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub provider_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub coordinate: Coordinate,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

/// Full detail record for a single place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    pub provider_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub coordinate: Coordinate,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Human-readable hours, one entry per weekday.
    pub opening_hours: Vec<String>,
    pub open_now: Option<bool>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub author: String,
    pub rating: Option<f64>,
    pub text: String,
    pub relative_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Parse a sentiment label case-insensitively.
    ///
    /// Unrecognized values default to `Sentiment::Neutral`.
    #[must_use]
    pub fn from_label(s: &str) -> Sentiment {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// AI-written digest of a place's visitor reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub text: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub recommendations: Vec<String>,
    pub sentiment: Sentiment,
}

impl ReviewSummary {
    /// The one placeholder summary used whenever no real summary can be
    /// produced, whether the place has no reviews or the summarizer
    /// failed. Every field is populated so downstream rendering never
    /// special-cases an absent summary.
    #[must_use]
    pub fn neutral_placeholder(place_name: &str) -> Self {
        ReviewSummary {
            text: format!("A review summary is not available for {place_name} right now."),
            pros: vec!["Not enough review data to list highlights".to_string()],
            cons: vec!["Not enough review data to list drawbacks".to_string()],
            recommendations: vec!["Visit and judge for yourself".to_string()],
            sentiment: Sentiment::Neutral,
        }
    }
}
