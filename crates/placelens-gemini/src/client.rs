//! HTTP client for the generative model API.
//!
//! Two operations back the resolution pipeline: storefront classification
//! (multimodal, one inline image) and review summarization (text only).
//! Both ask for a JSON answer via `response_mime_type` and deserialize the
//! model's text into domain types.

use std::time::Duration;

use base64::Engine;
use reqwest::{Client, Url};

use placelens_core::{BusinessGuess, Coordinate, Review, ReviewSummary, Sentiment};

use crate::error::GeminiError;
use crate::prompt;
use crate::types::{GenerateResponse, SummaryPayload};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Client for the generative model API.
///
/// Manages the HTTP client, API key, model name, and base URL. Use
/// [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests. Cloning is cheap and clones share
/// the underlying connection pool, so one client can serve both the
/// classification and summarization roles.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at the production model API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placelens/0.1 (storefront-resolution)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining the endpoint path appends to it rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeminiError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Identifies the business storefront in a photo.
    ///
    /// Sends the image inline (base64) together with a classification
    /// prompt that includes the capture coordinate as context, and parses
    /// the model's JSON answer into a [`BusinessGuess`].
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Api`] if the API rejects the request.
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::EmptyResponse`] if generation produced no text.
    /// - [`GeminiError::Deserialize`] if the answer is not the expected
    ///   JSON shape.
    pub async fn classify(
        &self,
        image_bytes: &[u8],
        hint: Coordinate,
    ) -> Result<BusinessGuess, GeminiError> {
        let request_body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": prompt::classify_prompt(hint) },
                    {
                        "inline_data": {
                            "mime_type": sniff_mime(image_bytes),
                            "data": base64::engine::general_purpose::STANDARD.encode(image_bytes),
                        }
                    }
                ]
            }],
            "generationConfig": { "response_mime_type": "application/json" }
        });

        let text = self.generate(&request_body, "classify").await?;
        let cleaned = strip_code_fence(&text);
        serde_json::from_str(cleaned).map_err(|e| GeminiError::Deserialize {
            context: "classify answer".to_string(),
            source: e,
        })
    }

    /// Produces a review digest for a place.
    ///
    /// # Errors
    ///
    /// Same error surface as [`GeminiClient::classify`]. Callers treat any
    /// of them as "no summary available" and fall back to the neutral
    /// placeholder.
    pub async fn summarize_reviews(
        &self,
        place_name: &str,
        category: &str,
        reviews: &[Review],
    ) -> Result<ReviewSummary, GeminiError> {
        let request_body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": prompt::summarize_prompt(place_name, category, reviews) }
                ]
            }],
            "generationConfig": { "response_mime_type": "application/json" }
        });

        let context = format!("summarize({place_name})");
        let text = self.generate(&request_body, &context).await?;
        let cleaned = strip_code_fence(&text);
        let payload: SummaryPayload =
            serde_json::from_str(cleaned).map_err(|e| GeminiError::Deserialize {
                context,
                source: e,
            })?;

        Ok(ReviewSummary {
            text: payload.summary,
            pros: payload.pros,
            cons: payload.cons,
            recommendations: payload.recommendations,
            sentiment: Sentiment::from_label(&payload.sentiment),
        })
    }

    /// Sends one `generateContent` call and returns the first text part.
    async fn generate(
        &self,
        request_body: &serde_json::Value,
        context: &str,
    ) -> Result<String, GeminiError> {
        let url = self.build_url()?;
        tracing::debug!(context, model = %self.model, "calling generative model");
        let response = self.client.post(url).json(request_body).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api(format!(
                "{status}: {}",
                api_error_message(&body)
            )));
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;

        envelope
            .first_text()
            .ok_or_else(|| GeminiError::EmptyResponse(context.to_string()))
    }

    fn build_url(&self) -> Result<Url, GeminiError> {
        let endpoint = format!("v1beta/models/{}:generateContent", self.model);
        let mut url = self
            .base_url
            .join(&endpoint)
            .map_err(|e| GeminiError::Api(format!("invalid endpoint '{endpoint}': {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

/// Pulls `error.message` out of a failure body, falling back to the raw
/// body when it isn't the documented error shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Strips an optional markdown code fence from a model answer.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start_matches(['\r', '\n']);
    rest.strip_suffix("```").map_or(rest, str::trim_end)
}

/// Best-effort image MIME sniffing from magic bytes. Unknown formats are
/// sent as JPEG, which the API tolerates for the formats phones produce.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
        "image/heic"
    } else {
        "image/jpeg"
    }
}
