use regex::Regex;
use std::sync::LazyLock;

use privatas_core::constants::is_already_sanitized;
use privatas_core::models::{Category, MatchFamily};

use super::Match;

/// A compiled freestanding detection pattern.
pub struct PatternMatcher {
    pub name: &'static str,
    pub category: Category,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pattern!(RE_EMAIL, r"(?i)\b[A-Z0-9._%+\-]+@[A-Z0-9.\-]+\.[A-Z]{2,}\b");

// ── Phone (North American, 10 significant digits) ─────────────────────────
// Country code, parenthesised area code, or a bare area code on a boundary.
pattern!(
    RE_PHONE,
    r"(?:\+?\b1[ .\-]?(?:\(\d{3}\)|\d{3})|\(\d{3}\)|\b\d{3})[ .\-]?\d{3}[ .\-]?\d{4}\b"
);

// ── Street address ─────────────────────────────────────────────────────────
pattern!(
    RE_ADDRESS,
    r"\b\d{1,6}[ \t]+(?:[A-Z][a-zA-Z\-]+[ \t]?){1,5}(?i:St|Street|Ave|Avenue|Rd|Road|Dr|Drive|Ln|Lane|Blvd|Boulevard|Ct|Court|Pkwy|Parkway|Cir|Circle|Pl|Place)\b(?:(?:,[ \t]*|[ \t]+)(?:Apt|Suite|Unit|#)[ \t]*\w{1,5}\b)?"
);

// ── SSN ────────────────────────────────────────────────────────────────────
pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Payment card number (grouped or ungrouped 16 digits) ──────────────────
pattern!(RE_PAN, r"\b(?:(?:\d{4}[\- ]){3}\d{4}|\d{16})\b");

// ── IPv4 ───────────────────────────────────────────────────────────────────
pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── Date of birth (MM/DD/YYYY) ─────────────────────────────────────────────
pattern!(
    RE_DOB,
    r"\b(?:0[1-9]|1[0-2])/(?:0[1-9]|[12]\d|3[01])/(?:19|20)\d{2}\b"
);

impl PatternMatcher {
    /// Find every match, skipping candidates produced by an earlier pass.
    pub fn find<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        let Some(re) = self.regex.as_ref() else {
            return Vec::new();
        };
        re.find_iter(text)
            .filter(|m| !is_already_sanitized(m.as_str()))
            .map(|m| Match {
                category: self.category,
                family: MatchFamily::Pattern,
                start: m.start(),
                end: m.end(),
                value: m.as_str(),
            })
            .collect()
    }
}

/// All freestanding patterns in application order.
pub fn all_patterns() -> Vec<PatternMatcher> {
    vec![
        PatternMatcher {
            name: "email",
            category: Category::Email,
            regex: &RE_EMAIL,
        },
        PatternMatcher {
            name: "phone",
            category: Category::Phone,
            regex: &RE_PHONE,
        },
        PatternMatcher {
            name: "address",
            category: Category::Address,
            regex: &RE_ADDRESS,
        },
        PatternMatcher {
            name: "ssn",
            category: Category::Ssn,
            regex: &RE_SSN,
        },
        PatternMatcher {
            name: "pan",
            category: Category::Pan,
            regex: &RE_PAN,
        },
        PatternMatcher {
            name: "ipv4",
            category: Category::Ip,
            regex: &RE_IPV4,
        },
        PatternMatcher {
            name: "dob",
            category: Category::Dob,
            regex: &RE_DOB,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched<'t>(name: &str, text: &'t str) -> Vec<&'t str> {
        let matcher = all_patterns()
            .into_iter()
            .find(|p| p.name == name)
            .unwrap();
        matcher.find(text).into_iter().map(|m| m.value).collect()
    }

    #[test]
    fn email_is_case_insensitive() {
        assert_eq!(matched("email", "mail JANE.Roe+x@Example.ORG now"), vec!["JANE.Roe+x@Example.ORG"]);
    }

    #[test]
    fn phone_formats() {
        assert_eq!(matched("phone", "call 555-123-4567"), vec!["555-123-4567"]);
        assert_eq!(matched("phone", "call (555) 123-4567"), vec!["(555) 123-4567"]);
        assert_eq!(matched("phone", "call 555.123.4567"), vec!["555.123.4567"]);
        assert_eq!(matched("phone", "call +1 555 123 4567"), vec!["+1 555 123 4567"]);
        assert_eq!(matched("phone", "call +15551234567"), vec!["+15551234567"]);
        assert_eq!(matched("phone", "call 5551234567"), vec!["5551234567"]);
    }

    #[test]
    fn phone_needs_ten_digits_on_a_boundary() {
        assert!(matched("phone", "order 555-1234").is_empty());
        assert!(matched("phone", "id 95551234567890").is_empty());
        assert!(matched("phone", "ssn 123-45-6789").is_empty());
    }

    #[test]
    fn address_with_suffix_and_unit() {
        assert_eq!(matched("address", "at 42 Baker Street."), vec!["42 Baker Street"]);
        assert_eq!(
            matched("address", "ship to 1600 Pennsylvania Ave, Suite 12 today"),
            vec!["1600 Pennsylvania Ave, Suite 12"]
        );
        assert_eq!(matched("address", "10 Downing st #4"), vec!["10 Downing st #4"]);
    }

    #[test]
    fn address_requires_capitalised_words_and_suffix() {
        assert!(matched("address", "I walked 42 blocks down the road").is_empty());
        assert!(matched("address", "42 Baker Things").is_empty());
    }

    #[test]
    fn ssn_exact_shape() {
        assert_eq!(matched("ssn", "ssn 123-45-6789."), vec!["123-45-6789"]);
        assert!(matched("ssn", "1234-56-7890").is_empty());
    }

    #[test]
    fn pan_grouped_and_ungrouped() {
        assert_eq!(matched("pan", "card 4111 1111 1111 1111 ok"), vec!["4111 1111 1111 1111"]);
        assert_eq!(matched("pan", "card 4111-1111-1111-1111"), vec!["4111-1111-1111-1111"]);
        assert_eq!(matched("pan", "card 4111111111111111"), vec!["4111111111111111"]);
        assert!(matched("pan", "card 41111111111111112").is_empty());
    }

    #[test]
    fn ipv4_octets_are_range_checked() {
        assert_eq!(matched("ipv4", "host 192.168.1.100 up"), vec!["192.168.1.100"]);
        assert_eq!(matched("ipv4", "mask 255.255.255.0"), vec!["255.255.255.0"]);
        assert!(matched("ipv4", "bad 256.1.1.1").is_empty());
        assert!(matched("ipv4", "bad 1.2.3").is_empty());
    }

    #[test]
    fn dob_month_day_year() {
        assert_eq!(matched("dob", "born 07/04/1976"), vec!["07/04/1976"]);
        assert!(matched("dob", "born 13/04/1976").is_empty());
        assert!(matched("dob", "born 07/32/1976").is_empty());
        assert!(matched("dob", "born 07/04/1876").is_empty());
    }
}
