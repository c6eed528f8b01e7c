//! Trait seams for the external collaborators.
//!
//! The orchestrator is generic over these three capabilities so tests can
//! drive it with scripted fakes; production wires in the HTTP clients
//! through the impls at the bottom of this module.

use async_trait::async_trait;

use placelens_core::{BusinessGuess, Candidate, Coordinate, PlaceDetails, Review, ReviewSummary};
use placelens_gemini::GeminiClient;
use placelens_places::PlacesClient;

/// Failure from an external collaborator, flattened to a message.
///
/// The orchestrator knows which call failed from where it made it, so the
/// trait surface only needs to carry the underlying description.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Identifies the business storefront shown in a photo.
#[async_trait]
pub trait VisionClassifier: Send + Sync {
    /// Classifies the photo, using the capture coordinate as context.
    ///
    /// # Errors
    ///
    /// Any provider failure; the attempt surfaces it as retryable.
    async fn classify(
        &self,
        image_bytes: &[u8],
        hint: Coordinate,
    ) -> Result<BusinessGuess, ProviderError>;
}

/// Place queries backing the search cascade and enrichment.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Searches around a coordinate by keyword, optionally constrained to
    /// a provider place type.
    ///
    /// # Errors
    ///
    /// Any provider failure. An empty result is `Ok(vec![])`, never an
    /// error.
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        keyword: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<Candidate>, ProviderError>;

    /// Free-text search, optionally biased toward a coordinate.
    ///
    /// # Errors
    ///
    /// Any provider failure. An empty result is `Ok(vec![])`, never an
    /// error.
    async fn search_text(
        &self,
        query: &str,
        bias: Option<Coordinate>,
        radius_meters: Option<u32>,
    ) -> Result<Vec<Candidate>, ProviderError>;

    /// Fetches the full detail record for one place.
    ///
    /// # Errors
    ///
    /// Any provider failure, including an id the provider no longer
    /// knows.
    async fn fetch_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError>;
}

/// Turns raw review text into a structured digest.
#[async_trait]
pub trait ReviewSummarizer: Send + Sync {
    /// Summarizes the reviews of one place.
    ///
    /// # Errors
    ///
    /// Any provider failure; callers degrade to the neutral placeholder.
    async fn summarize(
        &self,
        place_name: &str,
        category: &str,
        reviews: &[Review],
    ) -> Result<ReviewSummary, ProviderError>;
}

#[async_trait]
impl VisionClassifier for GeminiClient {
    async fn classify(
        &self,
        image_bytes: &[u8],
        hint: Coordinate,
    ) -> Result<BusinessGuess, ProviderError> {
        GeminiClient::classify(self, image_bytes, hint)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }
}

#[async_trait]
impl ReviewSummarizer for GeminiClient {
    async fn summarize(
        &self,
        place_name: &str,
        category: &str,
        reviews: &[Review],
    ) -> Result<ReviewSummary, ProviderError> {
        self.summarize_reviews(place_name, category, reviews)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }
}

#[async_trait]
impl PlaceSearch for PlacesClient {
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        keyword: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<Candidate>, ProviderError> {
        PlacesClient::search_nearby(self, center, radius_meters, keyword, place_type)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }

    async fn search_text(
        &self,
        query: &str,
        bias: Option<Coordinate>,
        radius_meters: Option<u32>,
    ) -> Result<Vec<Candidate>, ProviderError> {
        PlacesClient::search_text(self, query, bias, radius_meters)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }

    async fn fetch_details(&self, provider_id: &str) -> Result<PlaceDetails, ProviderError> {
        PlacesClient::fetch_details(self, provider_id)
            .await
            .map_err(|e| ProviderError(e.to_string()))
    }
}
