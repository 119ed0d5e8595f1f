//! Ordered matcher registry.
//!
//! Labeled-field matchers always run before freestanding ones. Within each
//! family the order of `all_labeled()` / `all_patterns()` is the order of
//! application, which also fixes the order counters are incremented in.

pub mod freestanding;
pub mod labeled;

use privatas_core::models::{Category, MatchFamily};

pub use freestanding::PatternMatcher;
pub use labeled::LabelMatcher;

/// A recognised span of sensitive content in one version of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    pub category: Category,
    pub family: MatchFamily,
    /// Byte offset of the replaced value.
    pub start: usize,
    pub end: usize,
    pub value: &'t str,
}

/// Labeled-field matchers in application order.
pub fn all_labeled() -> Vec<LabelMatcher> {
    labeled::all_patterns()
}

/// Freestanding matchers in application order.
pub fn all_patterns() -> Vec<PatternMatcher> {
    freestanding::all_patterns()
}
