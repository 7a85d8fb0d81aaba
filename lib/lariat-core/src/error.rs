//! Error types for lariat.

use bytes::Bytes;
use derive_more::{Display, Error, From};

// ============================================================================
// HTTP Error
// ============================================================================

/// An HTTP-level failure: a non-2xx response, or a transport failure.
///
/// Transport failures (connection refused, DNS, timeout) are reported with
/// status `0` and the status text `"connection failed"`; the body then carries
/// the underlying cause message. Responses with a real status keep whatever
/// body the server sent, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("HTTP error {status} {status_text}")]
pub struct HttpError {
    /// HTTP status code, or `0` when no response was received.
    pub status: u16,
    /// Canonical status text (e.g. `"Not Found"`), or `"connection failed"`.
    pub status_text: String,
    /// Raw response body, or the transport cause message.
    #[error(not(source))]
    pub body: Bytes,
}

impl HttpError {
    /// Create an error from an actual HTTP response.
    #[must_use]
    pub fn from_response(status: u16, status_text: impl Into<String>, body: Bytes) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Create a transport-level error (no HTTP response was received).
    #[must_use]
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self {
            status: 0,
            status_text: "connection failed".to_string(),
            body: Bytes::from(cause.to_string()),
        }
    }

    /// Returns `true` if no HTTP response was received at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        self.status == 0
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// The response body as UTF-8 text, with invalid sequences replaced.
    #[must_use]
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Try to decode the error body as JSON.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        crate::from_json(&self.body)
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for lariat operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// HTTP-level error: non-2xx response or transport failure.
    #[from]
    Http(HttpError),

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// A call supplied a different number of arguments than its template binds.
    #[display("arity mismatch: template binds {expected} values but the call supplied {actual}")]
    #[from(skip)]
    ArityMismatch {
        /// Number of values the call template binds.
        expected: usize,
        /// Number of values the call supplied.
        actual: usize,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// A 2xx response body failed to deserialize into the declared type.
    #[display("response decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the failing element (e.g. `"user.address.city"`).
        path: String,
        /// Error message.
        message: String,
        /// The raw response body that failed to decode.
        body: Bytes,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a decode error with path context and the offending body.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>, body: Bytes) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
            body,
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    ///
    /// Transport failures report status `0`.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns the inner [`HttpError`] if this is an HTTP error.
    #[must_use]
    pub const fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if this error came from a transport failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(err) if err.status == 0)
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
