//! Result type definition and extension traits.
//!
//! Provides combinators for call sites that log a failure and carry on with a
//! substitute value, without unwrap/expect/panic.

use std::fmt::Display;

use crate::error::Error;

/// The standard Result type for Arcana operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for results whose error is only worth a log line.
///
/// Works with any error type that implements `Display`.
pub trait ResultExt<T> {
    /// Get the value or compute a substitute, logging the error as a warning.
    fn or_else_logged<F: FnOnce() -> T>(self, context: &str, fallback: F) -> T;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn or_else_logged<F: FnOnce() -> T>(self, context: &str, fallback: F) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "{context}, using fallback");
                fallback()
            }
        }
    }
}
