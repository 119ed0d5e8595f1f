//! # privatas-core
//!
//! Foundation crate for the Privatas sanitization workspace.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PrivatasConfig;
pub use errors::{PrivatasError, PrivatasResult, SanitizeError};
pub use models::{Category, SanitizationMode, SanitizedText};
pub use traits::DocumentSanitizer;
