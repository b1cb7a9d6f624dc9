//! Configuration for the oracle client.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Shown in place of a prediction when the service cannot be consulted.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "The mists are too thick. The Oracle could not see clearly. Please try again.";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding [`OracleConfig::base_url`].
pub const API_URL_ENV: &str = "ARCANA_API_URL";
/// Environment variable overriding [`OracleConfig::timeout`], in seconds.
pub const TIMEOUT_SECS_ENV: &str = "ARCANA_TIMEOUT_SECS";

/// Configuration for the OracleClient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Root of the prediction service; `/api/predict` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Timeout for the prediction request.
    #[serde(with = "duration_secs", default = "default_timeout")]
    pub timeout: Duration,

    /// Prediction text used when the service fails.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl OracleConfig {
    /// Create a new config pointing at the given service.
    #[must_use]
    pub fn with_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Set the timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the fallback message.
    #[must_use]
    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `ARCANA_API_URL` / `ARCANA_TIMEOUT_SECS` from `lookup`.
    ///
    /// Unparseable values are logged and skipped.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV) {
            match url.parse() {
                Ok(parsed) => self.base_url = parsed,
                Err(e) => tracing::warn!(var = API_URL_ENV, value = %url, error = %e, "Ignoring invalid URL"),
            }
        }

        if let Some(secs) = lookup(TIMEOUT_SECS_ENV) {
            match secs.trim().parse::<u64>() {
                Ok(parsed) => self.timeout = Duration::from_secs(parsed),
                Err(e) => tracing::warn!(var = TIMEOUT_SECS_ENV, value = %secs, error = %e, "Ignoring invalid timeout"),
            }
        }

        self
    }

    /// Load configuration from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns `Core` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(arcana_core::config::load_file(path)?)
    }

    /// Full URL of the predict endpoint, keeping any path prefix on the base.
    ///
    /// # Errors
    ///
    /// Returns `UrlParse` if the joined URL is invalid.
    pub fn predict_url(&self) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/predict"))?)
    }
}

#[expect(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("hardcoded base URL is valid")
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

/// Serialization helper for Duration as seconds.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
