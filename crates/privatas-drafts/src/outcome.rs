use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a document-wide action is waiting on the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationKind {
    /// A new mode would replace manual edits.
    Overwrite,
    /// `none` would restore the original text and drop manual edits.
    Revert,
}

impl ConfirmationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for ConfirmationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a sanitize action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The active selection was rewritten and cleared.
    SelectionApplied,
    /// `none` cancelled the active selection; text unchanged.
    SelectionCleared,
    /// Nothing changed. Repeat with `confirmed = true` to proceed.
    ConfirmationRequired(ConfirmationKind),
    /// The draft was re-sanitized from its original text.
    DocumentApplied,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::ConfirmationRequired(_))
    }
}
