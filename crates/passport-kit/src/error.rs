//! Export error types

use passport_render::RenderError;
use passport_template::TemplateError;
use passport_xlsx::XlsxError;
use thiserror::Error;

/// Result type for passport export
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting a passport
#[derive(Debug, Error)]
pub enum ExportError {
    /// Template or passport document could not be loaded
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Rendering refused the template
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Workbook serialization failed
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
