mod config_error;
mod sanitize_error;

pub use config_error::ConfigError;
pub use sanitize_error::SanitizeError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum PrivatasError {
    #[error("sanitize error: {0}")]
    Sanitize(#[from] SanitizeError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("draft not found: {id}")]
    DraftNotFound { id: String },

    #[error("no active selection")]
    NoActiveSelection,
}

pub type PrivatasResult<T> = Result<T, PrivatasError>;
