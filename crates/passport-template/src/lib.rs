//! # passport-template
//!
//! Document model for device passports:
//! - [`Template`] - field schema plus optional spreadsheet [`Layout`]
//! - [`Passport`] - field values of one device, keyed by field key
//! - [`validate`] - optional layout checks (dangling keys, overlaps)
//! - [`SerialSequence`] - owned generator for asset tags and serial numbers
//!
//! Both documents are exchanged as camelCase JSON.

mod error;
mod field;
mod layout;
mod passport;
mod sequence;
mod style;
mod template;
mod validate;

pub use error::{TemplateError, TemplateResult};
pub use field::{ColumnDefinition, ColumnType, FieldDefinition, FieldType};
pub use layout::{
    ColumnWidth, FieldBinding, Layout, Merge, RowHeight, StaticCell, TableColumn, TableSection,
};
pub use passport::Passport;
pub use sequence::SerialSequence;
pub use style::{AlignmentSpec, BorderEdgeSpec, BorderSpec, CellStyle, FontSpec, UnderlineSpec};
pub use template::Template;
pub use validate::{validate, ItemKind, ItemRef, LayoutIssue};
