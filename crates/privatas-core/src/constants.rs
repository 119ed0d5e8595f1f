/// Glyph used by redact mode. One glyph per replaced character.
pub const REDACTION_GLYPH: char = '█';

/// Opening character of every tokenize placeholder.
pub const TOKEN_OPEN: char = '[';

/// Fixed placeholder for manually selected ranges in tokenize mode.
/// Manual selections carry no category, so no occurrence counter applies.
pub const MANUAL_TOKEN: &str = "[REDACTED_MANUAL]";

/// Prefix of the file name offered when downloading a sanitized history item.
pub const SANITIZED_FILE_PREFIX: &str = "sanitized-";

/// Returns true if `candidate` looks like the output of an earlier pass.
///
/// This is a heuristic: any bracket or redaction glyph counts, so genuine
/// document content containing `[` is also left alone.
pub fn is_already_sanitized(candidate: &str) -> bool {
    candidate.contains(TOKEN_OPEN) || candidate.contains(REDACTION_GLYPH)
}

/// A run of `count` redaction glyphs.
pub fn redaction_run(count: usize) -> String {
    std::iter::repeat(REDACTION_GLYPH).take(count).collect()
}
