//! # passport-xlsx
//!
//! Serializes a [`passport_sheet::Worksheet`] to an XLSX workbook.
//!
//! This is the only crate that touches `rust_xlsxwriter`: it converts the
//! neutral 1-based cell model into the library's 0-based calls, folds
//! identical cell styles into shared formats and stores dates as spreadsheet
//! serial numbers so number formats apply to them.

pub mod error;
pub mod naming;
pub mod options;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use naming::export_file_name;
pub use options::ExportOptions;
pub use writer::XlsxWriter;
