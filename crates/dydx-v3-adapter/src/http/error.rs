/*
[INPUT]:  Error sources (HTTP, API status, serialization, signing, key derivation)
[OUTPUT]: Structured error types carrying the original status and body
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the dYdX v3 adapter
#[derive(Error, Debug)]
pub enum DydxError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Signing delegate refused or failed to sign
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Signature was not valid hex
    #[error("Invalid hex in signature: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// STARK key derivation failed
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query parameters could not be encoded
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request parameters cannot form a valid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DydxError {
    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        DydxError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            DydxError::Api { status, .. } => Some(*status),
            DydxError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if the server failed to handle the request (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Check if error came from the signing delegate
    pub fn is_signing_error(&self) -> bool {
        matches!(self, DydxError::Signing(_))
    }
}

/// Result type alias for dYdX operations
pub type Result<T> = std::result::Result<T, DydxError>;
