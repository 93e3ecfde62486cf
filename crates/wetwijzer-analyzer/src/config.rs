//! Analyzer configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning knobs for [`QueryAnalyzer`](crate::QueryAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// A category is kept only when its score is strictly above this value.
    /// The default of 0.0 keeps every category with at least one keyword hit.
    pub inclusion_threshold: f32,

    /// Append related categories of each match, after the scored ones.
    pub expand_related: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            inclusion_threshold: 0.0,
            expand_related: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.inclusion_threshold.is_finite() {
            return Err(ConfigError::Invalid(
                "inclusion_threshold must be a finite number".into(),
            ));
        }
        if self.inclusion_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "inclusion_threshold must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&src)
    }
}
