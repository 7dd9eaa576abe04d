use thiserror::Error;

/// Errors from the completion call. Internal to the crate: `analyze` maps
/// every failure to the fallback result rather than surfacing these.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion API returned an unusable response.
    #[error("completion API error: {0}")]
    ApiError(String),

    /// The assistant message could not be parsed into analysis fields.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
