/*
[INPUT]:  Error sources (credential validation, serialization, HTTP, file IO)
[OUTPUT]: Structured error types with diagnostic context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the youtu adapter
#[derive(Error, Debug)]
pub enum YoutuError {
    /// Credential rejected at construction time
    #[error("Invalid credential: {0}")]
    Validation(String),

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Connection, DNS, timeout or body read failure
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not valid JSON or does not match the expected shape
    #[error("Failed to decode response: {source} (body: {body})")]
    Decoding {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client configuration is unusable (e.g. host does not form a valid URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl YoutuError {
    /// Check if the error is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, YoutuError::Network(err) if err.is_timeout())
    }

    /// Check if the error happened on the wire (connect, timeout, body read)
    pub fn is_network_error(&self) -> bool {
        matches!(self, YoutuError::Network(_))
    }

    /// Raw response body, available for decoding failures
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            YoutuError::Decoding { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn decoding(body: &[u8], source: serde_json::Error) -> Self {
        YoutuError::Decoding {
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        }
    }
}

impl From<url::ParseError> for YoutuError {
    fn from(err: url::ParseError) -> Self {
        YoutuError::Config(format!("invalid service URL: {err}"))
    }
}

/// Result type alias for youtu operations
pub type Result<T> = std::result::Result<T, YoutuError>;
