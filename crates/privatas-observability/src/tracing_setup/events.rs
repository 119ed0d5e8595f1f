//! Structured log events for the draft workflow.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a draft being attached to a board.
pub fn draft_attached(draft_id: &str, media_type: &str, size: u64, mode: &str) {
    tracing::info!(
        event = "draft_attached",
        draft_id = %draft_id,
        media_type = %media_type,
        size = size,
        mode = %mode,
        "draft attached"
    );
}

/// Log a document-wide mode being applied to a draft.
pub fn document_mode_applied(draft_id: &str, mode: &str, replaced: usize, discarded_edits: bool) {
    tracing::info!(
        event = "document_mode_applied",
        draft_id = %draft_id,
        mode = %mode,
        replaced = replaced,
        discarded_edits = discarded_edits,
        "document mode applied"
    );
}

/// Log a selection-scoped sanitize.
pub fn selection_applied(draft_id: &str, mode: &str, chars: usize) {
    tracing::info!(
        event = "selection_applied",
        draft_id = %draft_id,
        mode = %mode,
        chars = chars,
        "selection applied"
    );
}

/// Log an action held back until the user confirms it.
pub fn confirmation_required(draft_id: &str, kind: &str) {
    tracing::info!(
        event = "confirmation_required",
        draft_id = %draft_id,
        kind = %kind,
        "confirmation required"
    );
}

/// Log drafts moving into history on send.
pub fn history_recorded(count: usize) {
    tracing::info!(
        event = "history_recorded",
        count = count,
        "history recorded"
    );
}
