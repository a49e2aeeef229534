//! SDK error types and handling
//!
//! Every failure the client can observe is classified here, then folded
//! into the gallery's three-way taxonomy by the `From<SdkError>` impl.

use poke_gallery_core::CoreError;
use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The API answered with a non-2xx status
    #[error("Remote error: HTTP {status}")]
    RemoteError {
        /// HTTP status code
        status: u16,
    },

    /// A detail lookup answered with a non-2xx status
    #[error("No catalog entry for '{key}'")]
    NotFound {
        /// The name or id that was looked up
        key: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

impl SdkError {
    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::RemoteError { status } => Some(*status),
            SdkError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::NetworkError(_) | SdkError::Timeout(_))
    }
}

impl From<SdkError> for CoreError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::RemoteError { status } => CoreError::Remote { status },
            SdkError::NotFound { key } => CoreError::NotFound { key },
            SdkError::SerializationError(e) => CoreError::Decode(e.to_string()),
            SdkError::ConfigurationError(msg) => CoreError::Validation(msg),
            SdkError::UrlError(e) => CoreError::Validation(e.to_string()),
            err @ (SdkError::NetworkError(_) | SdkError::Timeout(_)) => {
                CoreError::Transport(err.to_string())
            }
        }
    }
}
