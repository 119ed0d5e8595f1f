// Single source of truth for all default values.

use crate::models::SanitizationMode;

// --- Sanitizer ---
pub const DEFAULT_SANITIZATION_MODE: SanitizationMode = SanitizationMode::Redact;

// --- Drafts ---
pub const DEFAULT_CONFIRM_MANUAL_OVERWRITE: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
