//! # passport-render
//!
//! Template workbook renderer: lays a [`Passport`]'s field values out on a
//! [`Worksheet`] according to its [`Template`]'s layout.
//!
//! Rendering runs in a fixed order over one worksheet:
//! 1. column widths and row heights
//! 2. static cells
//! 3. field bindings
//! 4. table sections
//!
//! A template without a layout is the only hard error. Every other problem
//! (a binding to a field that no longer exists, a table value that is not an
//! array, a merge that collides with another) skips just that item and is
//! recorded in the returned [`RenderReport`], so older passports keep
//! exporting whatever is still valid.
//!
//! [`Passport`]: passport_template::Passport
//! [`Template`]: passport_template::Template
//! [`Worksheet`]: passport_sheet::Worksheet

mod bindings;
mod error;
mod render;
mod report;
mod static_cells;
pub mod style;
mod tables;
pub mod value;

pub use error::{RenderError, RenderResult};
pub use render::{render, render_into, render_with_report, sheet_name};
pub use report::{RenderReport, SkipReason, SkippedItem};
pub use tables::rows_to_render;
