//! # privatas-sanitizer
//!
//! Local PII sanitization engine.
//! Labeled-field matchers (`Name: ...`, `Email: ...`) run first, then
//! freestanding pattern matchers (emails, phones, street addresses, SSNs,
//! card numbers, IPv4, dates of birth) run over the partially rewritten text.
//! Each match is tokenized, redacted, or deleted according to the mode.

pub mod counters;
pub mod degradation;
pub mod engine;
pub mod matchers;
pub mod selection;

pub use engine::{sanitize_whole_document, Sanitizer};
pub use selection::sanitize_selection;
