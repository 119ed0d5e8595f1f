use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy governing how a detected or selected span is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizationMode {
    /// Replace with a bracketed placeholder naming the category.
    Tokenize,
    /// Replace with an equal-length run of the redaction glyph.
    /// Older settings files stored this mode as `mask`.
    #[default]
    #[serde(alias = "mask")]
    Redact,
    /// Remove the span entirely.
    Delete,
    /// Leave text untouched. Cancels a pending selection action.
    None,
}

impl SanitizationMode {
    pub const ALL: [SanitizationMode; 4] = [
        SanitizationMode::Tokenize,
        SanitizationMode::Redact,
        SanitizationMode::Delete,
        SanitizationMode::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tokenize => "tokenize",
            Self::Redact => "redact",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }

    /// Whether this mode transforms text at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for SanitizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
