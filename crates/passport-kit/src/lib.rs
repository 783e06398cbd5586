//! # passport-kit
//!
//! Export device passports as XLSX workbooks.
//!
//! A [`Template`] describes a passport's fields and where they go on the
//! sheet; a [`Passport`] carries one device's values. [`PassportExporter`]
//! renders the pair onto a worksheet and serializes it, naming the file
//! `passport_{assetTag}_v{version}.xlsx`.
//!
//! ## Example
//!
//! ```rust
//! use passport_kit::prelude::*;
//!
//! let template = Template::from_json(r#"{
//!     "name": "Controller",
//!     "fields": [{"key": "serial", "label": "Serial", "type": "text"}],
//!     "layout": {
//!         "staticCells": [{"row": 1, "col": 1, "value": "Serial number"}],
//!         "bindings": [{"fieldKey": "serial", "row": 1, "col": 2}]
//!     }
//! }"#).unwrap();
//! let passport = Passport::new("INV-000042").with_value("serial", "SN-7781");
//!
//! let export = default_exporter().export_bytes(&template, &passport).unwrap();
//! assert!(export.bytes.starts_with(b"PK"));
//! assert!(export.report.is_clean());
//! ```

mod error;
mod exporter;
pub mod prelude;

pub use error::{ExportError, ExportResult};
pub use exporter::{default_exporter, Export, ExportedFile, PassportExporter, TemplateExt};

// Re-export the document model
pub use passport_template::{
    validate, CellStyle, FieldDefinition, FieldType, ItemKind, ItemRef, Layout, LayoutIssue,
    Passport, SerialSequence, Template, TemplateError,
};

// Re-export the worksheet model
pub use passport_sheet::{CellAddress, CellRange, CellValue, Worksheet};

// Re-export rendering and serialization
pub use passport_render::{render, render_with_report, RenderError, RenderReport, SkipReason};
pub use passport_xlsx::{export_file_name, ExportOptions, XlsxError, XlsxWriter};
