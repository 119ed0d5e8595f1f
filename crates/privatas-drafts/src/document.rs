use serde::{Deserialize, Serialize};

use privatas_core::errors::SanitizeError;
use privatas_core::models::{SanitizationMode, SanitizationStats};
use privatas_core::traits::DocumentSanitizer;

/// An attached document awaiting send.
///
/// `original_content` never changes after attach. `display_content` is what
/// gets sent: the sanitized text plus any manual edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDocument {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub media_type: String,
    original_content: String,
    pub display_content: String,
    pub mode: SanitizationMode,
    pub manually_edited: bool,
}

impl DraftDocument {
    /// Create a draft whose display text is `original_content` sanitized under `mode`.
    pub fn new(
        name: impl Into<String>,
        size: u64,
        media_type: impl Into<String>,
        original_content: impl Into<String>,
        mode: SanitizationMode,
        sanitizer: &dyn DocumentSanitizer,
    ) -> Self {
        let original_content = original_content.into();
        let display_content = sanitizer.sanitize(&original_content, mode).text;
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            size,
            media_type: media_type.into(),
            original_content,
            display_content,
            mode,
            manually_edited: false,
        }
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// Replace the display text with a user edit.
    pub fn edit_display_content(&mut self, content: impl Into<String>) {
        self.display_content = content.into();
        self.manually_edited = true;
    }

    /// Re-sanitize from the original text under `mode`.
    ///
    /// Manual edits in the display text are discarded. The edit flag is only
    /// cleared by `none`, which restores the original verbatim.
    pub fn apply_document_mode(
        &mut self,
        mode: SanitizationMode,
        sanitizer: &dyn DocumentSanitizer,
    ) -> SanitizationStats {
        let result = sanitizer.sanitize(&self.original_content, mode);
        self.display_content = result.text;
        self.mode = mode;
        if mode == SanitizationMode::None {
            self.manually_edited = false;
        }
        result.stats
    }

    /// Rewrite the character range `[start, end)` of the display text.
    pub fn apply_selection(
        &mut self,
        start: usize,
        end: usize,
        mode: SanitizationMode,
    ) -> Result<(), SanitizeError> {
        let updated =
            privatas_sanitizer::sanitize_selection(&self.display_content, start, end, mode)?;
        if mode.is_active() {
            self.display_content = updated;
            self.manually_edited = true;
        }
        Ok(())
    }

    /// Display text length in characters, the unit selection offsets use.
    pub fn display_len(&self) -> usize {
        self.display_content.chars().count()
    }
}
