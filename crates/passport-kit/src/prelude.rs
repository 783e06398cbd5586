//! Prelude module - common imports for passport-kit users
//!
//! ```rust
//! use passport_kit::prelude::*;
//! ```

pub use crate::{
    default_exporter, CellValue, ExportError, ExportOptions, ExportResult, Passport,
    PassportExporter, RenderReport, Template, TemplateExt, Worksheet,
};
