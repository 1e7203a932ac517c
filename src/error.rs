use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single chat request. None of these escape a submission:
/// the client logs them and renders a generic bot turn instead.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Startup failures. These are the only errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{url}': {source}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid delivery mode: '{0}'")]
    Delivery(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
