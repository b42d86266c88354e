use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the client. Both variants wrap the underlying error
/// unchanged; the client never inspects HTTP status codes or response
/// shapes beyond JSON decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure from the HTTP transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected payload
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
