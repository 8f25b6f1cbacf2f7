//! Error types for the networking module.

use std::fmt;

/// Network-specific errors.
///
/// The variants fall into three groups: transport failures (the request never
/// produced a usable response), status failures (the server answered with a
/// non-2xx status), and decode failures (a 2xx body that is not the expected
/// shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// HTTP request failed below the status layer.
    Request(String),
    /// Invalid URL provided.
    InvalidUrl(String),
    /// Request timed out at the transport layer.
    Timeout,
    /// Connection refused or failed (DNS, reset, unreachable host).
    Connection(String),
    /// Invalid header name or value.
    InvalidHeader(String),
    /// JSON serialization/deserialization error.
    Json(String),
    /// I/O error.
    Io(String),
    /// The server answered 401.
    Unauthorized,
    /// The server answered with another non-2xx status.
    BadResponse {
        /// The HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

impl NetworkError {
    /// Whether this error happened before any HTTP status was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Request(_) | Self::Timeout | Self::Connection(_) | Self::Io(_)
        )
    }

    /// Whether this error is a body decoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "HTTP request error: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Connection(msg) => write!(f, "Connection error: {msg}"),
            Self::InvalidHeader(msg) => write!(f, "Invalid header: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Unauthorized => write!(
                f,
                "Unauthorized access: You do not have permission to access this resource."
            ),
            Self::BadResponse { status, message } => {
                write!(f, "Bad response (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for NetworkError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for NetworkError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
