use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of response body bytes kept in error messages
const MAX_BODY_SNIPPET: usize = 400;

/// Errors that can occur when using the WebSets client
#[derive(Debug, Error)]
pub enum ExaError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Exa
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// A caller-supplied value that cannot be sent, such as an id that is not
    /// a single path segment
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// API error object from Exa
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Timestamp of the error
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Request path
    #[serde(default)]
    pub path: Option<String>,
    /// Error type string
    #[serde(default)]
    pub error: Option<String>,
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{code} {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl ExaError {
    /// HTTP status code reported by the server, when one was received
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(obj) => obj.status_code,
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::Serde(_) | Self::InvalidArgument(_) => None,
        }
    }

    /// Best human-readable description of the failure
    ///
    /// For API errors this is the server's own message; otherwise the
    /// underlying error text.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Api(obj) if !obj.message.is_empty() => obj.message.clone(),
            Self::Api(obj) => obj
                .error
                .clone()
                .unwrap_or_else(|| "request failed".to_string()),
            Self::Reqwest(e) => e.to_string(),
            Self::Config(msg) | Self::Serde(msg) | Self::InvalidArgument(msg) => msg.clone(),
        }
    }
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(MAX_BODY_SNIPPET)]).into_owned()
}

/// Maps a serde deserialization error to an `ExaError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> ExaError {
    ExaError::Serde(format!("{e}: {}", snippet(body)))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as JSON, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> ExaError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body) {
        obj.status_code = status_code;
        return ExaError::Api(obj);
    }

    // Gateways may answer with plain text or HTML; keep a bounded snippet
    ExaError::Api(ApiErrorObject {
        status_code,
        message: snippet(body),
        timestamp: None,
        path: None,
        error: Some(format!("http_{}", status.as_u16())),
    })
}
