//! # privatas-drafts
//!
//! Attached documents awaiting send. Each draft keeps its original text and
//! an editable sanitized copy; the board tracks the single active selection,
//! asks for confirmation before manual edits are overwritten, and moves
//! drafts into history on send.

pub mod board;
pub mod document;
pub mod history;
pub mod outcome;

pub use board::{ActiveSelection, DraftBoard};
pub use document::DraftDocument;
pub use history::HistoryItem;
pub use outcome::{ActionOutcome, ConfirmationKind};
