//! Error types for the Mattermost client.
//!
//! Distinguishes transport failures, structured application errors returned
//! by the server (the `AppError` envelope), and local marshaling failures.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type for Mattermost operations
pub type MattermostResult<T> = Result<T, MattermostError>;

/// Root error type for the Mattermost client
#[derive(Error, Debug)]
pub enum MattermostError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Network-level failure before any response was received
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Structured failure returned by the server
    #[error("API error: {0}")]
    Api(#[from] AppError),

    /// Request body could not be encoded or a successful response body
    /// could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

impl MattermostError {
    /// HTTP status code carried by the error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Whether this error came back from the server as an `AppError` envelope
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Header name or value was not valid
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// The offending header name
        name: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Other HTTP-level error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Local marshaling errors, tagged with the originating operation
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Request body could not be serialized
    #[error("{operation}: failed to encode request body: {message}")]
    Encode {
        /// Operation that produced the body
        operation: String,
        /// Underlying serde error
        message: String,
    },

    /// Response body could not be deserialized into the expected shape
    #[error("{operation}: failed to decode response body: {message}")]
    Decode {
        /// Operation that issued the request
        operation: String,
        /// Underlying serde error
        message: String,
    },
}

impl SerializationError {
    /// Encode failure for the given operation
    pub fn encode(operation: &str, err: serde_json::Error) -> Self {
        Self::Encode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// Decode failure for the given operation
    pub fn decode(operation: &str, err: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

/// Structured error envelope used by the Mattermost server.
///
/// Decode-only: the client never produces this envelope, it only reads it
/// off failed responses. The JSON field names are fixed by the wire
/// contract; `operation` and the wrapped cause are local-only.
#[derive(Debug, Deserialize)]
pub struct AppError {
    /// Machine-readable error identifier
    pub id: String,
    /// Message suitable for display to an end user
    #[serde(default)]
    pub message: String,
    /// Internal error string to help the developer
    #[serde(default)]
    pub detailed_error: String,
    /// Request id echoed from the response header
    #[serde(default)]
    pub request_id: String,
    /// HTTP status code of the failed response
    #[serde(default)]
    pub status_code: u16,
    /// Whether the error is OAuth specific
    #[serde(default)]
    pub is_oauth: bool,
    /// Operation that produced the error, e.g. `Client.GetChannel`
    #[serde(skip)]
    pub operation: String,
    /// Wrapped cause, e.g. the original decode error
    #[serde(skip)]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a locally synthesized error
    pub fn new(operation: &str, id: &str, details: &str, status_code: u16) -> Self {
        Self {
            id: id.to_string(),
            message: id.to_string(),
            detailed_error: details.to_string(),
            request_id: String::new(),
            status_code,
            is_oauth: false,
            operation: operation.to_string(),
            cause: None,
        }
    }

    /// Attach a wrapped cause, preserved through `Error::source`
    pub fn wrap(mut self, err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.cause = Some(err.into());
        self
    }

    /// Tag the error with the operation that observed it
    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = operation.to_string();
        self
    }

    /// Parse an error envelope from a response body.
    ///
    /// Bodies that do not decode as the envelope produce a fallback error
    /// whose detail embeds the raw body text, never a decode failure.
    pub fn from_body(operation: &str, status_code: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        match serde_json::from_slice::<AppError>(body) {
            Ok(mut err) => {
                err.operation = operation.to_string();
                if err.status_code == 0 {
                    err.status_code = status_code;
                }
                err
            }
            Err(decode_err) => AppError::new(
                operation,
                "model.utils.decode_json.app_error",
                &format!("body: {}", text),
                status_code,
            )
            .wrap(decode_err),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.operation.is_empty() {
            write!(f, "{}: ", self.operation)?;
        }
        write!(f, "{}", self.message)?;
        if !self.detailed_error.is_empty() {
            write!(f, ", {}", self.detailed_error)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, ", {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
