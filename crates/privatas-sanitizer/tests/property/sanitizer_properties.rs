use privatas_core::SanitizationMode;
use privatas_sanitizer::{sanitize_selection, sanitize_whole_document, Sanitizer};
use proptest::prelude::*;

/// One PII fragment or one lowercase filler word.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{2,9}",
        ("[a-z]{3,8}", "[a-z]{3,8}").prop_map(|(user, domain)| format!("{user}@{domain}.com")),
        ("[2-9][0-9]{2}", "[0-9]{3}", "[0-9]{4}").prop_map(|(a, b, c)| format!("{a}-{b}-{c}")),
        ("[2-9][0-9]{2}", "[0-9]{3}", "[0-9]{4}").prop_map(|(a, b, c)| format!("({a}) {b}-{c}")),
        ("[0-9]{3}", "[0-9]{2}", "[0-9]{4}").prop_map(|(a, b, c)| format!("{a}-{b}-{c}")),
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
        (1u32..=12, 1u32..=28, 1900u32..2030)
            .prop_map(|(m, d, y)| format!("{m:02}/{d:02}/{y}")),
        "[0-9]{4} [0-9]{4} [0-9]{4} [0-9]{4}",
        "(Name|Surname|phone|Mobile|Email|street|Address)(:)?",
        Just("[x]".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment(), prop_oneof![Just(" "), Just("\n")]), 0..12).prop_map(
        |parts| {
            parts
                .into_iter()
                .map(|(fragment, sep)| format!("{fragment}{sep}"))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn none_mode_is_identity(text in ".{0,200}") {
        prop_assert_eq!(sanitize_whole_document(&text, SanitizationMode::None), text);
    }

    #[test]
    fn redact_preserves_character_count(text in ".{0,200}") {
        let result = Sanitizer::new().sanitize_with_report(&text, SanitizationMode::Redact);
        prop_assert_eq!(result.text.chars().count(), text.chars().count());
        for redaction in &result.redactions {
            prop_assert_eq!(redaction.replacement.chars().count(), redaction.matched_chars);
        }
    }

    #[test]
    fn redact_preserves_character_count_on_documents(doc in document()) {
        let redacted = sanitize_whole_document(&doc, SanitizationMode::Redact);
        prop_assert_eq!(redacted.chars().count(), doc.chars().count());
    }

    #[test]
    fn second_tokenize_pass_changes_nothing(doc in document()) {
        let first = sanitize_whole_document(&doc, SanitizationMode::Tokenize);
        let second = sanitize_whole_document(&first, SanitizationMode::Tokenize);
        prop_assert_eq!(
            first.matches('[').count(),
            second.matches('[').count(),
            "new tokens on second pass: first='{}', second='{}'",
            first,
            second
        );
    }

    #[test]
    fn single_email_is_always_email_1(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}"
    ) {
        let input = format!("reach me at {user}@{domain}.org");
        for _ in 0..2 {
            prop_assert_eq!(
                sanitize_whole_document(&input, SanitizationMode::Tokenize),
                "reach me at [EMAIL_1]"
            );
        }
    }

    #[test]
    fn selection_delete_splices(
        prefix in "[a-zé ]{0,20}",
        middle in "[a-zé ]{0,20}",
        suffix in "[a-zé ]{0,20}"
    ) {
        let text = format!("{prefix}{middle}{suffix}");
        let start = prefix.chars().count();
        let end = start + middle.chars().count();
        prop_assert_eq!(
            sanitize_selection(&text, start, end, SanitizationMode::Delete).unwrap(),
            format!("{prefix}{suffix}")
        );
        let redacted = sanitize_selection(&text, start, end, SanitizationMode::Redact).unwrap();
        prop_assert_eq!(redacted.chars().count(), text.chars().count());
    }
}
