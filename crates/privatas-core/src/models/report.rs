use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, SanitizationMode};

/// Which matcher family produced a redaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFamily {
    /// Value following an explicit field label such as `Email:`.
    Labeled,
    /// Self-contained pattern recognised by shape alone.
    Pattern,
}

impl MatchFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Labeled => "labeled",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for MatchFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single replacement applied during sanitization.
///
/// The original matched text is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redaction {
    pub category: Category,
    pub family: MatchFamily,
    /// Length of the replaced value in characters.
    pub matched_chars: usize,
    pub replacement: String,
}

/// Per-category match counts for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizationStats {
    pub counts: BTreeMap<Category, usize>,
    pub total: usize,
}

impl SanitizationStats {
    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// Result of whole-document sanitization with metadata about what was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedText {
    pub text: String,
    pub mode: SanitizationMode,
    pub redactions: Vec<Redaction>,
    pub stats: SanitizationStats,
}

impl SanitizedText {
    /// A pass-through result: nothing matched or the mode was `none`.
    pub fn unchanged(text: impl Into<String>, mode: SanitizationMode) -> Self {
        Self {
            text: text.into(),
            mode,
            redactions: Vec::new(),
            stats: SanitizationStats::default(),
        }
    }

    pub fn has_redactions(&self) -> bool {
        !self.redactions.is_empty()
    }
}
