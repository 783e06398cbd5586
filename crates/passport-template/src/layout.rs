//! Spreadsheet layout of a template
//!
//! Coordinates are 1-based, exactly as template authors write them: row 1 is
//! the first row and column 1 is column `A`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::{BorderEdgeSpec, CellStyle};

/// Sheet-level layout: size overrides plus the three kinds of layout items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_widths: Vec<ColumnWidth>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_heights: Vec<RowHeight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_cells: Vec<StaticCell>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<FieldBinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableSection>,
}

impl Layout {
    /// Whether the layout positions anything at all
    pub fn is_empty(&self) -> bool {
        self.static_cells.is_empty() && self.bindings.is_empty() && self.tables.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub col: u16,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowHeight {
    pub row: u32,
    pub height: f64,
}

fn one_row() -> u32 {
    1
}

fn one_col() -> u16 {
    1
}

/// Merge span anchored at an item's coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    #[serde(default = "one_row")]
    pub rows: u32,
    #[serde(default = "one_col")]
    pub cols: u16,
}

impl Merge {
    pub fn new(rows: u32, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// A span of a single cell needs no merge
    pub fn spans_multiple(&self) -> bool {
        self.rows > 1 || self.cols > 1
    }
}

/// Literal content at a fixed coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticCell {
    pub row: u32,
    pub col: u16,
    /// Written verbatim (string, number, boolean or null)
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<Merge>,
}

/// Maps one scalar field's value onto a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBinding {
    pub field_key: String,
    pub row: u32,
    pub col: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
    /// Text prepended to the formatted value; forces a string cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<Merge>,
}

/// One column of a table section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Key of the value inside each row record
    pub key: String,
    /// Header text; falls back to the field's column title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<CellStyle>,
}

impl TableColumn {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            title: None,
            width: None,
            style: None,
            header_style: None,
        }
    }
}

/// Maps one table field onto a rectangular block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSection {
    pub field_key: String,
    pub row: u32,
    pub col: u16,
    #[serde(default)]
    pub draw_header: bool,
    #[serde(default)]
    pub columns: Vec<TableColumn>,
    /// Overrides the field's own `minRows`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rows: Option<u32>,
    /// Overrides the field's own `maxRows`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u32>,
    /// Pad up to `maxRows` with empty gridded rows (default true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_empty_rows_with_grid: Option<bool>,
    #[serde(default)]
    pub show_grid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_style: Option<BorderEdgeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<CellStyle>,
    /// Data-row style for columns without their own `style`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_style: Option<CellStyle>,
}

impl TableSection {
    pub fn new<S: Into<String>>(field_key: S, row: u32, col: u16) -> Self {
        Self {
            field_key: field_key.into(),
            row,
            col,
            draw_header: false,
            columns: Vec::new(),
            min_rows: None,
            max_rows: None,
            fill_empty_rows_with_grid: None,
            show_grid: false,
            grid_style: None,
            header_style: None,
            row_style: None,
        }
    }

    pub fn fills_empty_rows_with_grid(&self) -> bool {
        self.fill_empty_rows_with_grid.unwrap_or(true)
    }

    /// Row holding the first data record
    pub fn first_data_row(&self) -> u32 {
        if self.draw_header {
            self.row + 1
        } else {
            self.row
        }
    }
}
