//! Core error types for Arcana.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across the workspace.
#[derive(Debug, Error)]
pub enum Error {
    // I/O errors
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("unsupported config format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },
}

impl Error {
    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::file_read_failed("/tmp/arcana.toml", "denied");
        assert_eq!(
            err.to_string(),
            "failed to read file '/tmp/arcana.toml': denied"
        );

        let err = Error::UnsupportedFormat {
            extension: "yaml".to_string(),
        };
        assert!(err.to_string().contains("'yaml'"));

        let err = Error::toml_parse_failed("expected `=`");
        assert_eq!(err.to_string(), "TOML parse error: expected `=`");
    }
}
