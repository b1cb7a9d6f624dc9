//! Configuration file loading.
//!
//! The format is picked from the file extension: `.json` is parsed with
//! serde_json, `.toml` with toml. Anything else is rejected.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::result::Result;

/// Load and deserialize a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or does not deserialize into `T`.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::file_read_failed(path, e.to_string()))?;

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), format = %extension, "Loading config file");

    match extension.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| Error::json_parse_failed(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| Error::toml_parse_failed(e.to_string())),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}
