use privatas_core::errors::SanitizeError;
use privatas_core::models::{Redaction, SanitizationMode, SanitizedText};
use privatas_core::traits::DocumentSanitizer;

use crate::counters::{self, CategoryCounters};
use crate::degradation::{self, DegradationTracker};
use crate::matchers::{self, Match};
use crate::selection;

/// Sanitizer that detects PII in a text buffer and rewrites each match
/// according to a [`SanitizationMode`].
///
/// Holds no state between calls. Labeled-field matchers run first, so their
/// output (tokens or redaction glyphs) is already in place and protected by
/// the re-processing guard when the freestanding matchers scan the text.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    _private: (),
}

impl Sanitizer {
    pub fn new() -> Self {
        let health = degradation::check_pattern_health();
        if health.has_failures() {
            tracing::warn!(
                failed = health.failure_count(),
                "sanitizer running with degraded patterns"
            );
        }
        Self { _private: () }
    }

    /// Sanitize with a full report of what was replaced.
    pub fn sanitize_with_report(&self, text: &str, mode: SanitizationMode) -> SanitizedText {
        if !mode.is_active() || text.is_empty() {
            return SanitizedText::unchanged(text, mode);
        }

        let mut pass = Pass::new(mode);
        let mut current = text.to_string();

        for matcher in matchers::all_labeled() {
            current = {
                let found = matcher.find(&current);
                pass.splice(&current, &found)
            };
        }
        for matcher in matchers::all_patterns() {
            current = {
                let found = matcher.find(&current);
                pass.splice(&current, &found)
            };
        }

        let stats = pass.counters.into_stats();
        tracing::debug!(
            event = "document_sanitized",
            mode = %mode,
            replaced = stats.total,
            input_bytes = text.len(),
            output_bytes = current.len(),
            "document sanitized"
        );

        SanitizedText {
            text: current,
            mode,
            redactions: pass.redactions,
            stats,
        }
    }

    /// Patterns that failed to compile, if any.
    pub fn pattern_health(&self) -> DegradationTracker {
        degradation::check_pattern_health()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSanitizer for Sanitizer {
    fn sanitize(&self, text: &str, mode: SanitizationMode) -> SanitizedText {
        self.sanitize_with_report(text, mode)
    }

    fn sanitize_selection(
        &self,
        text: &str,
        start: usize,
        end: usize,
        mode: SanitizationMode,
    ) -> Result<String, SanitizeError> {
        selection::sanitize_selection(text, start, end, mode)
    }
}

/// Sanitize a whole document and return only the rewritten text.
///
/// `none` mode and empty input return the text unchanged.
pub fn sanitize_whole_document(text: &str, mode: SanitizationMode) -> String {
    Sanitizer::new().sanitize_with_report(text, mode).text
}

/// Mutable state of one sanitize invocation.
struct Pass {
    mode: SanitizationMode,
    counters: CategoryCounters,
    redactions: Vec<Redaction>,
}

impl Pass {
    fn new(mode: SanitizationMode) -> Self {
        Self {
            mode,
            counters: CategoryCounters::new(),
            redactions: Vec::new(),
        }
    }

    /// Replace `matches` (ascending, non-overlapping) in `text`.
    fn splice(&mut self, text: &str, matches: &[Match<'_>]) -> String {
        if matches.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for m in matches {
            out.push_str(&text[cursor..m.start]);

            let occurrence = self.counters.next(m.category);
            let replacement = counters::render(self.mode, m.category, occurrence, m.value);
            out.push_str(&replacement);
            self.redactions.push(Redaction {
                category: m.category,
                family: m.family,
                matched_chars: m.value.chars().count(),
                replacement,
            });

            cursor = m.end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}
