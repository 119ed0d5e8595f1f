use serde::{Deserialize, Serialize};

use super::defaults;

/// Draft workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftsConfig {
    /// Ask before a document-wide mode overwrites manual edits.
    pub confirm_manual_overwrite: bool,
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            confirm_manual_overwrite: defaults::DEFAULT_CONFIRM_MANUAL_OVERWRITE,
        }
    }
}
