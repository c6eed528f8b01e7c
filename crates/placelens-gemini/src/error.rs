use thiserror::Error;

/// Errors returned by the generative model client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success HTTP status with a message.
    #[error("model API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model answered but produced no usable text part, e.g. a
    /// safety-blocked response.
    #[error("model returned no usable content for {0}")]
    EmptyResponse(String),
}
