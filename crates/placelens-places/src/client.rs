//! HTTP client for the place web service.
//!
//! Wraps `reqwest` with provider-specific error handling, API key management,
//! and typed response deserialization. Every endpoint checks the `"status"`
//! field in the JSON envelope: `"OK"` and `"ZERO_RESULTS"` are success (an
//! empty result list is a valid answer, not a failure), everything else is
//! surfaced as [`PlacesError::Api`] or [`PlacesError::QuotaExceeded`].

use std::time::Duration;

use reqwest::{Client, Url};

use placelens_core::{Candidate, Coordinate, PlaceDetails};

use crate::error::PlacesError;
use crate::normalize::{candidate_from_result, details_from_result};
use crate::retry::retry_with_backoff;
use crate::types::{DetailsEnvelope, SearchEnvelope};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Fields requested from the details endpoint. Listing them explicitly keeps
/// the response (and its billing class) to what enrichment actually uses.
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,geometry,rating,\
user_ratings_total,formatted_phone_number,website,opening_hours,reviews";

/// Client for the place web service.
///
/// Manages the HTTP client, API key, base URL, and retry policy. Use
/// [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PlacesClient {
    /// Creates a new client pointed at the production place API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, max_retries, backoff_base_ms, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placelens/0.1 (storefront-resolution)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends to it rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Searches for places around `center` by keyword, optionally
    /// constrained to a provider place type.
    ///
    /// Returns candidates in the provider's own ranking order. An empty
    /// vector means the provider answered and found nothing inside the
    /// radius.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] / [`PlacesError::QuotaExceeded`] if the API
    ///   returns a failure status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        keyword: &str,
        place_type: Option<&str>,
    ) -> Result<Vec<Candidate>, PlacesError> {
        let location = center.to_string();
        let radius = radius_meters.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", keyword),
        ];
        if let Some(t) = place_type {
            params.push(("type", t));
        }

        let url = self.build_url("nearbysearch/json", &params)?;
        let body = self.request_with_retry(&url).await?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(keyword={keyword})"),
                source: e,
            })?;

        Ok(envelope
            .results
            .into_iter()
            .filter_map(candidate_from_result)
            .collect())
    }

    /// Searches for places matching a free-text query, optionally biased
    /// toward a coordinate and radius.
    ///
    /// # Errors
    ///
    /// Same error surface as [`PlacesClient::search_nearby`].
    pub async fn search_text(
        &self,
        query: &str,
        bias: Option<Coordinate>,
        radius_meters: Option<u32>,
    ) -> Result<Vec<Candidate>, PlacesError> {
        let mut params = vec![("query", query)];
        // Bind the owned strings outside the if blocks so the borrows live
        // long enough.
        let location;
        if let Some(center) = bias {
            location = center.to_string();
            params.push(("location", &location));
        }
        let radius;
        if let Some(r) = radius_meters {
            radius = r.to_string();
            params.push(("radius", &radius));
        }

        let url = self.build_url("textsearch/json", &params)?;
        let body = self.request_with_retry(&url).await?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Ok(envelope
            .results
            .into_iter()
            .filter_map(candidate_from_result)
            .collect())
    }

    /// Fetches the full detail record for a place by provider ID.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns a failure status, omits
    ///   the result record, or the record's geometry is out of range.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_details(&self, provider_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", provider_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_with_retry(&url).await?;

        let envelope: DetailsEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={provider_id})"),
                source: e,
            })?;

        let result = envelope.result.ok_or_else(|| {
            PlacesError::Api(format!("details response for {provider_id} has no result"))
        })?;

        details_from_result(result).ok_or_else(|| {
            PlacesError::Api(format!(
                "details for {provider_id} carry an out-of-range coordinate"
            ))
        })
    }

    /// Builds the full endpoint URL with properly percent-encoded query
    /// parameters. The API key is always appended first.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::Api(format!("invalid endpoint '{endpoint}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request with retry, asserts a 2xx HTTP status, parses
    /// the body as JSON, and checks the envelope status.
    async fn request_with_retry(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_checked(url)
        })
        .await
    }

    async fn request_checked(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: url.path().to_string(),
                source: e,
            })?;
        Self::check_api_error(&value)?;
        Ok(value)
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure. `"ZERO_RESULTS"` is success: the provider
    /// answered, there was simply nothing to find.
    fn check_api_error(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => {
                let msg = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("no error message");
                if other == "OVER_QUERY_LIMIT" {
                    Err(PlacesError::QuotaExceeded(msg.to_string()))
                } else {
                    Err(PlacesError::Api(format!("{other}: {msg}")))
                }
            }
        }
    }
}
