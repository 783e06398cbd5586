//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A cell's value plus its style attribute bag
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "C4")
//! - [`CellRange`] - A rectangle of cells (e.g., "B6:C9")

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::CellValue;

use crate::style::{Alignment, Border, Fill, Font};

/// A single cell: value plus independently settable style attributes.
///
/// Every style attribute is optional so that successive writers can layer
/// attributes onto the same cell without clobbering each other: a writer that
/// only sets `border` leaves `font` exactly as an earlier writer left it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Cell value
    pub value: CellValue,
    /// Font settings
    pub font: Option<Font>,
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Border edges
    pub border: Option<Border>,
    /// Background fill
    pub fill: Option<Fill>,
    /// Number format code (e.g., "dd.mm.yyyy")
    pub num_fmt: Option<String>,
}

impl Cell {
    /// Create an empty, unstyled cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the cell carries any style attribute
    pub fn has_style(&self) -> bool {
        self.font.is_some()
            || self.alignment.is_some()
            || self.border.is_some()
            || self.fill.is_some()
            || self.num_fmt.is_some()
    }
}
