//! Error types for the oracle crate.

use thiserror::Error;

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while consulting the prediction service.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to reach the prediction service.
    #[error("connection failed: {reason}")]
    ConnectionFailed { reason: String },

    /// Request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The service answered with something other than a prediction.
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    /// The service answered with a non-success status.
    #[error("prediction service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP error from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parse error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] arcana_core::Error),
}

impl Error {
    /// Create a connection failed error.
    pub fn connection_failed(reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            reason: reason.into(),
        }
    }

    /// Create a timeout error.
    #[must_use]
    pub const fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    /// Create an invalid response error.
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::status(503, "busy");
        assert_eq!(err.to_string(), "prediction service returned 503: busy");
    }

    #[test]
    fn test_core_error_conversion() {
        let err: Error = arcana_core::Error::json_parse_failed("eof").into();
        assert!(matches!(err, Error::Core(_)));
        assert_eq!(err.to_string(), "core error: JSON parse error: eof");
    }
}
