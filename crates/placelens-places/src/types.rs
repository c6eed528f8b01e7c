//! Place provider API response types.
//!
//! All types model the JSON structures returned by the place web service.
//! Search endpoints answer with `{"status": ..., "results": [...]}` and the
//! details endpoint with `{"status": ..., "result": {...}}`; both carry an
//! optional `error_message` on failure statuses.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// nearbysearch / textsearch
// ---------------------------------------------------------------------------

/// Envelope for the two search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single place entry in a search response.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    /// Short address form used by nearby search.
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Full address form used by text search.
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Envelope for the details endpoint.
#[derive(Debug, Deserialize)]
pub struct DetailsEnvelope {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Full detail record for one place.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResult {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub reviews: Vec<ReviewResult>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// One visitor review embedded in a details response.
#[derive(Debug, Deserialize)]
pub struct ReviewResult {
    pub author_name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub relative_time_description: Option<String>,
}
