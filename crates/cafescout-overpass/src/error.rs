use thiserror::Error;

/// Errors returned by the Overpass API client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The interpreter answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured interpreter endpoint is not a valid URL.
    #[error("invalid Overpass endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
