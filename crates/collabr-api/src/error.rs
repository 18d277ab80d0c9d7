use thiserror::Error;

/// Errors returned by the marketplace backend client.
///
/// There is deliberately no retry machinery behind any of these: mutations
/// (registration, collaboration requests, payments) must never be silently
/// duplicated, and retrying reads would mask authorization failures as
/// transient. Callers see exactly what the wire produced.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned `"status": "error"` with a message.
    #[error("backend error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx HTTP status outside the backend's error envelope.
    #[error("unexpected HTTP status {status} from {method}")]
    UnexpectedStatus { status: u16, method: &'static str },

    /// A blob URL that does not parse as a URL.
    #[error("invalid blob URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
