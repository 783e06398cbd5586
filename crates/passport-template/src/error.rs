//! Template loading error types

use thiserror::Error;

/// Result type for template/passport loading
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while loading templates and passports
#[derive(Debug, Error)]
pub enum TemplateError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
