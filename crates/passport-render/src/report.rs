//! Render outcome bookkeeping

use std::fmt;

use passport_sheet::CellRange;
use passport_template::ItemRef;

/// Why a layout item was not (fully) rendered
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The item names a field the template does not define
    UnknownField(String),
    /// A binding points at a table field
    TableFieldBinding(String),
    /// The table field's value is missing or not an array
    NotAnArray(String),
    /// The item's coordinates fall outside the sheet
    InvalidCoordinate(String),
    /// The value was written but its merge collided with an earlier one
    MergeConflict(CellRange),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownField(key) => write!(f, "unknown field '{}'", key),
            SkipReason::TableFieldBinding(key) => {
                write!(f, "field '{}' is a table; bind it through a table section", key)
            }
            SkipReason::NotAnArray(key) => write!(f, "value of '{}' is not an array", key),
            SkipReason::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {}", msg),
            SkipReason::MergeConflict(range) => {
                write!(f, "merge {} overlaps an earlier merge", range)
            }
        }
    }
}

/// A skipped layout item and the reason
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedItem {
    pub item: ItemRef,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item, self.reason)
    }
}

/// What a render wrote and what it skipped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderReport {
    pub static_cells: usize,
    pub bindings: usize,
    pub tables: usize,
    /// Data rows written across all tables, padding rows included
    pub table_rows: usize,
    pub merges: usize,
    pub skipped: Vec<SkippedItem>,
}

impl RenderReport {
    /// True when nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub(crate) fn skip(&mut self, item: ItemRef, reason: SkipReason) {
        log::debug!("skipping {}: {}", item, reason);
        self.skipped.push(SkippedItem { item, reason });
    }
}
