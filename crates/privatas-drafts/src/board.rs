//! DraftBoard: the drafts attached to one chat module, plus its send history.

use chrono::Utc;
use serde::Serialize;

use privatas_core::config::PrivatasConfig;
use privatas_core::errors::{PrivatasError, PrivatasResult, SanitizeError};
use privatas_core::models::SanitizationMode;
use privatas_core::traits::DocumentSanitizer;
use privatas_observability::events;
use privatas_sanitizer::Sanitizer;

use crate::document::DraftDocument;
use crate::history::HistoryItem;
use crate::outcome::{ActionOutcome, ConfirmationKind};

/// A pending range in one draft's display text, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSelection<'a> {
    pub draft_id: &'a str,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    draft_id: String,
    start: usize,
    end: usize,
}

/// Drafts for one chat module.
///
/// At most one selection exists at a time. A sanitize action on the draft
/// that owns it rewrites the selection only; on any other draft it applies a
/// document-wide mode.
pub struct DraftBoard {
    sanitizer: Box<dyn DocumentSanitizer>,
    default_mode: SanitizationMode,
    confirm_manual_overwrite: bool,
    drafts: Vec<DraftDocument>,
    selection: Option<Selection>,
    history: Vec<HistoryItem>,
}

impl DraftBoard {
    pub fn new(config: &PrivatasConfig) -> Self {
        Self::with_sanitizer(config, Box::new(Sanitizer::new()))
    }

    pub fn with_sanitizer(config: &PrivatasConfig, sanitizer: Box<dyn DocumentSanitizer>) -> Self {
        Self {
            sanitizer,
            default_mode: config.sanitizer.default_mode,
            confirm_manual_overwrite: config.drafts.confirm_manual_overwrite,
            drafts: Vec::new(),
            selection: None,
            history: Vec::new(),
        }
    }

    /// Attach a document in the configured default mode. Returns the draft id.
    pub fn attach(
        &mut self,
        name: impl Into<String>,
        size: u64,
        media_type: impl Into<String>,
        content: impl Into<String>,
    ) -> String {
        let draft = DraftDocument::new(
            name,
            size,
            media_type,
            content,
            self.default_mode,
            self.sanitizer.as_ref(),
        );
        events::draft_attached(&draft.id, &draft.media_type, size, self.default_mode.as_str());
        let id = draft.id.clone();
        self.drafts.push(draft);
        id
    }

    pub fn get(&self, draft_id: &str) -> Option<&DraftDocument> {
        self.drafts.iter().find(|d| d.id == draft_id)
    }

    /// Drafts in attach order.
    pub fn drafts(&self) -> &[DraftDocument] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Record a selection on `draft_id`, replacing any previous one.
    pub fn select(&mut self, draft_id: &str, start: usize, end: usize) -> PrivatasResult<()> {
        let len = self.draft(draft_id)?.display_len();
        if start > end || end > len {
            return Err(SanitizeError::InvalidRange { start, end, len }.into());
        }
        self.selection = Some(Selection {
            draft_id: draft_id.to_string(),
            start,
            end,
        });
        Ok(())
    }

    pub fn active_selection(&self) -> Option<ActiveSelection<'_>> {
        self.selection.as_ref().map(|s| ActiveSelection {
            draft_id: &s.draft_id,
            start: s.start,
            end: s.end,
        })
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Replace a draft's display text. Drops a selection on that draft,
    /// since its offsets no longer describe the text.
    pub fn edit(&mut self, draft_id: &str, content: impl Into<String>) -> PrivatasResult<()> {
        self.draft_mut(draft_id)?.edit_display_content(content);
        if self.selection_owner() == Some(draft_id) {
            self.selection = None;
        }
        Ok(())
    }

    /// Apply `mode` to `draft_id`.
    ///
    /// A selection on this draft takes precedence over the document-wide
    /// mode. Overwriting manual edits needs `confirmed` unless confirmation is
    /// disabled in configuration.
    pub fn sanitize_action(
        &mut self,
        draft_id: &str,
        mode: SanitizationMode,
        confirmed: bool,
    ) -> PrivatasResult<ActionOutcome> {
        let discarded_edits = self.draft(draft_id)?.manually_edited;

        if self.selection_owner() == Some(draft_id) {
            return self.apply_active_selection(mode);
        }

        if discarded_edits && self.confirm_manual_overwrite && !confirmed {
            let kind = if mode == SanitizationMode::None {
                ConfirmationKind::Revert
            } else {
                ConfirmationKind::Overwrite
            };
            events::confirmation_required(draft_id, kind.as_str());
            return Ok(ActionOutcome::ConfirmationRequired(kind));
        }

        let index = self.draft_index(draft_id)?;
        let stats = self.drafts[index].apply_document_mode(mode, self.sanitizer.as_ref());
        events::document_mode_applied(draft_id, mode.as_str(), stats.total, discarded_edits);
        Ok(ActionOutcome::DocumentApplied)
    }

    /// Apply `mode` to the active selection, wherever it is, and clear it.
    ///
    /// The selection is consumed even when its range turns out to be invalid.
    pub fn apply_active_selection(
        &mut self,
        mode: SanitizationMode,
    ) -> PrivatasResult<ActionOutcome> {
        let selection = self.selection.take().ok_or(PrivatasError::NoActiveSelection)?;
        if !mode.is_active() {
            return Ok(ActionOutcome::SelectionCleared);
        }

        let draft = self.draft_mut(&selection.draft_id)?;
        draft.apply_selection(selection.start, selection.end, mode)?;
        events::selection_applied(
            &selection.draft_id,
            mode.as_str(),
            selection.end - selection.start,
        );
        Ok(ActionOutcome::SelectionApplied)
    }

    /// Remove a draft and any selection pointing at it.
    pub fn remove(&mut self, draft_id: &str) -> PrivatasResult<DraftDocument> {
        let index = self.draft_index(draft_id)?;
        if self.selection_owner() == Some(draft_id) {
            self.selection = None;
        }
        Ok(self.drafts.remove(index))
    }

    /// Move every draft into history and return the new items.
    ///
    /// Each send is prepended to the history, so the newest batch comes
    /// first; within a batch, attach order is kept.
    pub fn send(&mut self) -> Vec<HistoryItem> {
        let now = Utc::now();
        let batch: Vec<HistoryItem> = self
            .drafts
            .drain(..)
            .map(|d| HistoryItem::from_draft(d, now))
            .collect();
        self.selection = None;
        if !batch.is_empty() {
            events::history_recorded(batch.len());
            self.history.splice(0..0, batch.iter().cloned());
        }
        batch
    }

    /// Sent documents, newest first.
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn selection_owner(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.draft_id.as_str())
    }

    fn draft_index(&self, draft_id: &str) -> PrivatasResult<usize> {
        self.drafts
            .iter()
            .position(|d| d.id == draft_id)
            .ok_or_else(|| PrivatasError::DraftNotFound {
                id: draft_id.to_string(),
            })
    }

    fn draft(&self, draft_id: &str) -> PrivatasResult<&DraftDocument> {
        let index = self.draft_index(draft_id)?;
        Ok(&self.drafts[index])
    }

    fn draft_mut(&mut self, draft_id: &str) -> PrivatasResult<&mut DraftDocument> {
        let index = self.draft_index(draft_id)?;
        Ok(&mut self.drafts[index])
    }
}

impl Default for DraftBoard {
    fn default() -> Self {
        Self::new(&PrivatasConfig::default())
    }
}
