//! Logging configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::UtilsError;
use crate::logging::{init_logging, LogFormat};

/// How a contract host should emit logs.
///
/// Can be loaded from a TOML file via [`LogConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive, e.g. `"info"` or `"warn,iou_contracts=debug"`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, UtilsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| UtilsError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, UtilsError> {
        toml::from_str(s).map_err(|e| UtilsError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, UtilsError> {
        toml::to_string_pretty(self).map_err(|e| UtilsError::Config(e.to_string()))
    }

    /// Install the global subscriber described by this config.
    pub fn init(&self) -> Result<(), UtilsError> {
        init_logging(self.format, &self.level)
    }
}
