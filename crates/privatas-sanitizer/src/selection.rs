//! Selection-scoped sanitize: rewrite one caller-chosen character range.
//!
//! Independent of the matcher pipeline. Manual selections carry no category,
//! so tokenize mode always inserts the same fixed marker.

use privatas_core::constants::{redaction_run, MANUAL_TOKEN};
use privatas_core::errors::SanitizeError;
use privatas_core::models::SanitizationMode;

/// Replace the characters `[start, end)` of `text` according to `mode`.
///
/// Offsets count characters. `none` leaves the text unchanged; clearing the
/// caller's pending selection is the caller's job.
pub fn sanitize_selection(
    text: &str,
    start: usize,
    end: usize,
    mode: SanitizationMode,
) -> Result<String, SanitizeError> {
    let len = text.chars().count();
    if start > end || end > len {
        return Err(SanitizeError::InvalidRange { start, end, len });
    }

    let replacement = match mode {
        SanitizationMode::None => return Ok(text.to_string()),
        SanitizationMode::Tokenize => MANUAL_TOKEN.to_string(),
        SanitizationMode::Redact => redaction_run(end - start),
        SanitizationMode::Delete => String::new(),
    };

    let byte_start = byte_offset(text, start);
    let byte_end = byte_offset(text, end);

    tracing::debug!(
        event = "selection_sanitized",
        mode = %mode,
        chars = end - start,
        "selection sanitized"
    );

    let mut out = String::with_capacity(text.len() - (byte_end - byte_start) + replacement.len());
    out.push_str(&text[..byte_start]);
    out.push_str(&replacement);
    out.push_str(&text[byte_end..]);
    Ok(out)
}

/// Byte offset of the `char_idx`-th character (or the end of `text`).
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}
