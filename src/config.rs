//! Top-level configuration for the `arcana` binary.
//!
//! ```toml
//! selection_limit = 3
//!
//! [oracle]
//! base_url = "http://localhost:8000"
//! timeout = 30
//!
//! [fan]
//! arc_angle_degrees = 100.0
//! radius = 1500.0
//! orientation = "upward"
//! ```

use std::path::Path;

use arcana_oracle::OracleConfig;
use arcana_ui::FanConfig;
use arcana_ui::models::selection::DEFAULT_SELECTION_LIMIT;
use serde::{Deserialize, Serialize};

/// Everything the CLI can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcanaConfig {
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub fan: FanConfig,
    /// Cards drawn per reading
    #[serde(default = "default_selection_limit")]
    pub selection_limit: usize,
}

impl Default for ArcanaConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            fan: FanConfig::default(),
            selection_limit: DEFAULT_SELECTION_LIMIT,
        }
    }
}

impl ArcanaConfig {
    /// Load from `path` when given, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> arcana_core::Result<Self> {
        let config = match path {
            Some(path) => arcana_core::config::load_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply environment overrides using `lookup`.
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.oracle = self.oracle.with_env_overrides(lookup);
        self
    }
}

const fn default_selection_limit() -> usize {
    DEFAULT_SELECTION_LIMIT
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use arcana_ui::ArcOrientation;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_defaults() {
        let config = ArcanaConfig::default();
        assert_eq!(config.selection_limit, 3);
        assert_eq!(config.fan, FanConfig::default());
    }

    #[test]
    fn test_partial_toml_file() -> TestResult {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(
            file,
            "selection_limit = 4\n\n[oracle]\ntimeout = 7\n\n[fan]\norientation = \"pivoted\""
        )?;

        let config: ArcanaConfig = arcana_core::config::load_file(file.path())?;
        assert_eq!(config.selection_limit, 4);
        assert_eq!(config.oracle.timeout, Duration::from_secs(7));
        assert_eq!(config.oracle.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.fan.orientation, ArcOrientation::Pivoted);
        assert!((config.fan.radius - 1500.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_json_file() -> TestResult {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(file, r#"{{"fan": {{"radius": 800.0}}}}"#)?;

        let config: ArcanaConfig = arcana_core::config::load_file(file.path())?;
        assert!((config.fan.radius - 800.0).abs() < f64::EPSILON);
        assert_eq!(config.selection_limit, 3);
        Ok(())
    }

    #[test]
    fn test_env_overrides_reach_the_oracle() {
        let config = ArcanaConfig::default().with_env_overrides(|key| {
            (key == "ARCANA_API_URL").then(|| "http://oracle.internal:8080".to_string())
        });
        assert_eq!(config.oracle.base_url.port(), Some(8080));
    }
}
