//! Per-invocation occurrence counters and replacement rendering.

use privatas_core::constants::redaction_run;
use privatas_core::models::{Category, SanitizationMode, SanitizationStats};

/// Occurrence counters keyed by category. A fresh value is created for every
/// whole-document call, so token numbering always restarts at 1.
#[derive(Debug, Default)]
pub struct CategoryCounters {
    stats: SanitizationStats,
}

impl CategoryCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `category` and return its 1-based occurrence index.
    pub fn next(&mut self, category: Category) -> usize {
        self.stats.record(category);
        self.stats.count(category)
    }

    pub fn into_stats(self) -> SanitizationStats {
        self.stats
    }
}

/// Replacement text for `value`, the `occurrence`-th match of `category`.
pub fn render(mode: SanitizationMode, category: Category, occurrence: usize, value: &str) -> String {
    match mode {
        SanitizationMode::Tokenize => category.token(occurrence),
        SanitizationMode::Redact => redaction_run(value.chars().count()),
        SanitizationMode::Delete => String::new(),
        SanitizationMode::None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_one_based_per_category() {
        let mut counters = CategoryCounters::new();
        assert_eq!(counters.next(Category::Email), 1);
        assert_eq!(counters.next(Category::Phone), 1);
        assert_eq!(counters.next(Category::Email), 2);

        let stats = counters.into_stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(Category::Email), 2);
        assert_eq!(stats.count(Category::Dob), 0);
    }

    #[test]
    fn render_per_mode() {
        let value = "jane@roe.io";
        assert_eq!(render(SanitizationMode::Tokenize, Category::Email, 3, value), "[EMAIL_3]");
        assert_eq!(render(SanitizationMode::Redact, Category::Email, 1, value), "█".repeat(11));
        assert_eq!(render(SanitizationMode::Delete, Category::Email, 1, value), "");
        assert_eq!(render(SanitizationMode::None, Category::Email, 1, value), value);
    }

    #[test]
    fn redact_counts_characters_not_bytes() {
        let rendered = render(SanitizationMode::Redact, Category::Name, 1, "Zoë Åberg");
        assert_eq!(rendered.chars().count(), 9);
    }
}
