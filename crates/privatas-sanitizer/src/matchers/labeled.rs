use regex::Regex;
use std::sync::LazyLock;

use privatas_core::constants::is_already_sanitized;
use privatas_core::models::{Category, MatchFamily};

use super::Match;

// Label synonyms per category. Longer alternatives come first so that
// `First Name:` is taken as one label rather than `Name:`.
const NAME_LABELS: &str =
    r"full[ \t]+name|first[ \t]+name|last[ \t]+name|given[ \t]+name|surname|name";
const ADDRESS_LABELS: &str = r"address|street";
const PHONE_LABELS: &str = r"(?:telephone|phone|mobile|tel)(?:[ \t]+(?:number|no\.?))?";
const EMAIL_LABELS: &str = r"e-mail|email";

// A colon with optional padding, or plain horizontal whitespace. Never spans
// a line break, so a label at the end of one line cannot take the next line.
const LABEL_SEPARATOR: &str = r"(?:[ \t]*:[ \t]*|[ \t]+)";

/// A labeled-field matcher. The regex matches the label and its separator;
/// the value is everything after it up to the end of the field.
pub struct LabelMatcher {
    pub name: &'static str,
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! label_pattern {
    ($name:ident, $labels:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            Regex::new(&format!(r"(?i)\b(?:{}){LABEL_SEPARATOR}", $labels)).ok()
        });
    };
}

label_pattern!(RE_NAME_LABEL, NAME_LABELS);
label_pattern!(RE_ADDRESS_LABEL, ADDRESS_LABELS);
label_pattern!(RE_PHONE_LABEL, PHONE_LABELS);
label_pattern!(RE_EMAIL_LABEL, EMAIL_LABELS);

/// A `,` or `;` followed by another known label and its separator ends the
/// current field, so `Name: Jane Roe, email: jane@x.io` holds two fields on
/// one line.
pub static RE_FIELD_BREAK: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)[,;][ \t]*(?:{NAME_LABELS}|{ADDRESS_LABELS}|{PHONE_LABELS}|{EMAIL_LABELS})(?:[ \t]*:|[ \t]+)"
    ))
    .ok()
});

impl LabelMatcher {
    /// Find every non-empty, not-yet-sanitized field value for this label.
    pub fn find<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let Some(re) = self.regex.as_ref() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut search_from = 0;
        while let Some(label) = re.find_at(text, search_from) {
            let value_start = label.end();
            let Some(value_end) = value_end(text, value_start) else {
                search_from = value_start;
                continue;
            };
            let value = &text[value_start..value_end];
            if is_already_sanitized(value) {
                // Later labels inside a skipped value still get their turn.
                search_from = value_start;
                continue;
            }
            search_from = value_end;
            out.push(Match {
                category: self.category,
                family: MatchFamily::Labeled,
                start: value_start,
                end: value_end,
                value,
            });
        }
        out
    }
}

/// End of the value starting at `value_start`, with trailing whitespace
/// excluded. `None` when the value is empty or blank.
pub fn value_end(text: &str, value_start: usize) -> Option<usize> {
    let rest = &text[value_start..];
    let line_end = rest.find(|c| c == '\r' || c == '\n').unwrap_or(rest.len());
    let line = &rest[..line_end];

    let field_end = RE_FIELD_BREAK
        .as_ref()
        .and_then(|re| re.find(line))
        .map_or(line_end, |m| m.start());

    let value = line[..field_end].trim_end();
    if value.is_empty() {
        None
    } else {
        Some(value_start + value.len())
    }
}

/// All labeled-field matchers in application order.
pub fn all_patterns() -> Vec<LabelMatcher> {
    vec![
        LabelMatcher {
            name: "name_label",
            category: Category::Name,
            regex: &RE_NAME_LABEL,
        },
        LabelMatcher {
            name: "address_label",
            category: Category::Address,
            regex: &RE_ADDRESS_LABEL,
        },
        LabelMatcher {
            name: "phone_label",
            category: Category::Phone,
            regex: &RE_PHONE_LABEL,
        },
        LabelMatcher {
            name: "email_label",
            category: Category::Email,
            regex: &RE_EMAIL_LABEL,
        },
    ]
}
