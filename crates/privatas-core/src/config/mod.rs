pub mod defaults;
mod drafts_config;
mod observability_config;
mod sanitizer_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use drafts_config::DraftsConfig;
pub use observability_config::ObservabilityConfig;
pub use sanitizer_config::SanitizerConfig;

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivatasConfig {
    pub sanitizer: SanitizerConfig,
    pub drafts: DraftsConfig,
    pub observability: ObservabilityConfig,
}

impl PrivatasConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}
