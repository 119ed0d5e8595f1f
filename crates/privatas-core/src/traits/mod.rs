mod sanitizer;

pub use sanitizer::DocumentSanitizer;
