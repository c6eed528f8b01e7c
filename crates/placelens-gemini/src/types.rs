//! Generative model API response types.
//!
//! The `generateContent` endpoint wraps generated text in a
//! candidates/content/parts hierarchy; every level can legitimately be
//! absent when generation is blocked, so everything defaults.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseCandidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// The first text part of the first candidate, which is where the
    /// model's JSON answer lands in practice.
    #[must_use]
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

/// Model output shape for review summarization. `summary` is required;
/// a response without it is treated as a failed summarization.
#[derive(Debug, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub sentiment: String,
}
