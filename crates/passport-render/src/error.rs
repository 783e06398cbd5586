//! Render error types

use thiserror::Error;

/// Result type for rendering
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that abort a render
///
/// Only structural problems end up here; missing or malformed data for a
/// single layout item is skipped and reported instead.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template defines no spreadsheet layout
    #[error("Template '{0}' has no layout defined")]
    MissingLayout(String),
}
