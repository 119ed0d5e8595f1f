//! Graceful degradation for the sanitizer.
//!
//! If a pattern fails to compile, it is skipped and logged, and sanitization
//! continues with the remaining patterns. Callers can audit the gap.

use privatas_core::models::MatchFamily;

use crate::matchers;

/// Record of a pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub family: MatchFamily,
}

/// Degradation tracker. Accumulates pattern failures.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, pattern_name: &str, family: MatchFamily) {
        tracing::warn!(
            event = "pattern_degraded",
            pattern = %pattern_name,
            family = %family,
            "sanitizer pattern failed to compile, skipping"
        );
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            family,
        });
    }

    /// Whether any patterns failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Check every registered pattern and report the ones that did not compile.
pub fn check_pattern_health() -> DegradationTracker {
    let mut tracker = DegradationTracker::new();
    for pat in matchers::all_labeled() {
        if pat.regex.is_none() {
            tracker.record_failure(pat.name, MatchFamily::Labeled);
        }
    }
    for pat in matchers::all_patterns() {
        if pat.regex.is_none() {
            tracker.record_failure(pat.name, MatchFamily::Pattern);
        }
    }
    tracker
}
