use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SanitizationMode;

/// Sanitizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Mode applied to newly attached drafts.
    pub default_mode: SanitizationMode,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            default_mode: defaults::DEFAULT_SANITIZATION_MODE,
        }
    }
}
