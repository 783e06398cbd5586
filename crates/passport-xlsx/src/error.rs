//! XLSX error types

use thiserror::Error;

/// Result type for XLSX export
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the workbook writer
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
