/// Argument errors raised at the sanitize call boundary.
///
/// Pattern matching itself never fails; only caller-supplied offsets can be
/// wrong. Offsets are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("invalid selection range {start}..{end} for text of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },
}
