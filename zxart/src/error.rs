//! Error types for the zxart client

use thiserror::Error;

/// Result type for zxart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building requests or decoding responses
#[derive(Error, Debug)]
pub enum Error {
    /// Option name with no translation to the wire format
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Timecode field that is not `[[H:]M:]S[.fraction]`
    #[error("Malformed duration: {0:?}")]
    MalformedDuration(String),

    /// Date field that is not `DD.MM.YYYY`
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// Unix timestamp outside the representable range
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(i64),

    /// Envelope status other than `success`
    #[error("Invalid response status: {0:?}")]
    InvalidResponse(String),

    /// Body is not JSON or does not match the envelope shape
    #[error("Malformed response at {path}: {source}")]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success HTTP status
    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// Transport failure, passed through from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
