use thiserror::Error;

/// Errors returned by the place-search client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success envelope status, e.g. a denied
    /// key or malformed request.
    #[error("places API error: {0}")]
    Api(String),

    /// The provider reported `OVER_QUERY_LIMIT`; the per-second allowance
    /// usually recovers after a short back-off.
    #[error("places API query limit hit: {0}")]
    QuotaExceeded(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
