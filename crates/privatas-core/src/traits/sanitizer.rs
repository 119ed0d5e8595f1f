use crate::errors::SanitizeError;
use crate::models::{SanitizationMode, SanitizedText};

/// Local PII sanitization.
///
/// Implementations must be pure: the same `(text, mode)` always yields the
/// same output and no state carries between calls.
pub trait DocumentSanitizer: Send + Sync {
    /// Sanitize a whole document, replacing every recognised span.
    fn sanitize(&self, text: &str, mode: SanitizationMode) -> SanitizedText;

    /// Sanitize only the character range `[start, end)` of `text`.
    fn sanitize_selection(
        &self,
        text: &str,
        start: usize,
        end: usize,
        mode: SanitizationMode,
    ) -> Result<String, SanitizeError>;
}
