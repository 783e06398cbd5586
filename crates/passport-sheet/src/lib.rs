//! # passport-sheet
//!
//! Library-neutral worksheet model used by the passport renderer.
//!
//! The types here are plain data: a [`Worksheet`] is a sparse grid of
//! [`Cell`]s, each carrying a value and an optional bag of style attributes
//! (font, alignment, border, fill, number format), plus merged regions and
//! column/row size overrides. Nothing in this crate knows about a concrete
//! spreadsheet file format; serialization lives behind an adapter.
//!
//! Rows and columns are **1-based** throughout (row 1 is the first row,
//! column 1 is column `A`), matching the coordinates template authors write.
//!
//! ## Example
//!
//! ```rust
//! use passport_sheet::{CellRange, CellValue, Worksheet};
//!
//! let mut sheet = Worksheet::new("Passport");
//! sheet.cell_at_mut(1, 1).unwrap().value = CellValue::from("Serial number");
//! sheet.merge_cells(CellRange::from_coords(1, 1, 1, 3)).unwrap();
//!
//! assert_eq!(sheet.value("A1").unwrap(), CellValue::from("Serial number"));
//! assert_eq!(sheet.merged_regions().len(), 1);
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod worksheet;

pub use cell::{Cell, CellAddress, CellRange, CellValue};
pub use error::{Error, Result};
pub use style::{
    Alignment, Border, BorderEdge, BorderLineStyle, Color, Fill, Font, HorizontalAlignment,
    Underline, VerticalAlignment,
};
pub use worksheet::{Column, Row, Worksheet};

/// Maximum number of rows in a worksheet (Excel limit, 1-based inclusive)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit, 1-based inclusive)
pub const MAX_COLS: u16 = 16_384;
