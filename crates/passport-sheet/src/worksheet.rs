//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellAddress, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column index (1-based)
    pub index: u16,
    /// Custom width in characters (`None` = default)
    pub width: Option<f64>,
}

/// Row metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row index (1-based)
    pub index: u32,
    /// Custom height in points (`None` = default)
    pub height: Option<f64>,
}

/// A single worksheet: sparse cells, merged regions and size overrides
///
/// Cells are kept in row-major order so iteration is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cells keyed by (row, col)
    cells: BTreeMap<(u32, u16), Cell>,
    /// Merged regions in insertion order
    merged: Vec<CellRange>,
    /// Column overrides
    columns: BTreeMap<u16, Column>,
    /// Row overrides
    rows: BTreeMap<u32, Row>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            merged: Vec::new(),
            columns: BTreeMap::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "C4")
    pub fn cell(&self, address: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by 1-based row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Get a mutable cell, creating an empty one on first access
    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Result<&mut Cell> {
        CellAddress::validate(row, col)?;
        Ok(self.cells.entry((row, col)).or_default())
    }

    /// Get cell value by address (empty if the cell was never written)
    pub fn value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.value_at(addr.row, addr.col))
    }

    /// Get cell value by indices (empty if the cell was never written)
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Iterate over all touched cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> + '_ {
        self.cells
            .iter()
            .map(|(&(row, col), cell)| (CellAddress::new(row, col), cell))
    }

    /// Number of touched cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the used range (bounds of all touched cells)
    pub fn used_range(&self) -> Option<CellRange> {
        let mut keys = self.cells.keys();
        let &(first_row, first_col) = keys.next()?;
        let (mut min_row, mut max_row) = (first_row, first_row);
        let (mut min_col, mut max_col) = (first_col, first_col);
        for &(row, col) in keys {
            min_row = min_row.min(row);
            max_row = max_row.max(row);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }
        Some(CellRange::from_coords(min_row, min_col, max_row, max_col))
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    /// Merge cells
    ///
    /// Fails if the range leaves the sheet or overlaps an existing merge.
    pub fn merge_cells(&mut self, range: CellRange) -> Result<()> {
        CellAddress::validate(range.start.row, range.start.col)?;
        CellAddress::validate(range.end.row, range.end.col)?;

        if self.merged.iter().any(|existing| existing.overlaps(&range)) {
            return Err(Error::MergedCellConflict(range.to_string()));
        }
        self.merged.push(range);
        Ok(())
    }

    /// Find the merged region containing the given cell
    pub fn merged_region_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        let addr = CellAddress::new(row, col);
        self.merged.iter().find(|range| range.contains(&addr))
    }

    // === Row/Column Operations ===

    /// Get column metadata, if any override was set
    pub fn column(&self, index: u16) -> Option<&Column> {
        self.columns.get(&index)
    }

    /// Get mutable column metadata, creating it on first access
    pub fn column_mut(&mut self, index: u16) -> Result<&mut Column> {
        if index == 0 || index > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(index, MAX_COLS));
        }
        Ok(self
            .columns
            .entry(index)
            .or_insert_with(|| Column { index, width: None }))
    }

    /// Get custom column width
    pub fn column_width(&self, index: u16) -> Option<f64> {
        self.columns.get(&index).and_then(|c| c.width)
    }

    /// Set column width
    pub fn set_column_width(&mut self, index: u16, width: f64) -> Result<()> {
        self.column_mut(index)?.width = Some(width);
        Ok(())
    }

    /// Iterate over column overrides in index order
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.values()
    }

    /// Get row metadata, if any override was set
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get mutable row metadata, creating it on first access
    pub fn row_mut(&mut self, index: u32) -> Result<&mut Row> {
        if index == 0 || index > MAX_ROWS {
            return Err(Error::RowOutOfBounds(index, MAX_ROWS));
        }
        Ok(self
            .rows
            .entry(index)
            .or_insert_with(|| Row { index, height: None }))
    }

    /// Get custom row height
    pub fn row_height(&self, index: u32) -> Option<f64> {
        self.rows.get(&index).and_then(|r| r.height)
    }

    /// Set row height
    pub fn set_row_height(&mut self, index: u32, height: f64) -> Result<()> {
        self.row_mut(index)?.height = Some(height);
        Ok(())
    }

    /// Iterate over row overrides in index order
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Border, BorderEdge, Font};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_access() {
        let mut ws = Worksheet::new("Test");
        ws.cell_at_mut(4, 3).unwrap().value = CellValue::from("x");

        assert_eq!(ws.value("C4").unwrap(), CellValue::from("x"));
        assert_eq!(ws.value_at(1, 1), CellValue::Empty);
        assert!(ws.cell("A1").unwrap().is_none());
        assert_eq!(ws.cell_count(), 1);
    }

    #[test]
    fn test_zero_index_rejected() {
        let mut ws = Worksheet::new("Test");
        assert!(matches!(ws.cell_at_mut(0, 1), Err(Error::RowOutOfBounds(0, _))));
        assert!(matches!(ws.cell_at_mut(1, 0), Err(Error::ColumnOutOfBounds(0, _))));
        assert!(ws.column_mut(0).is_err());
        assert!(ws.row_mut(0).is_err());
        assert_eq!(ws.cell_count(), 0);
    }

    #[test]
    fn test_style_attributes_layer() {
        let mut ws = Worksheet::new("Test");
        ws.cell_at_mut(1, 1).unwrap().font = Some(Font::new().with_bold(true));
        ws.cell_at_mut(1, 1).unwrap().border = Some(Border::all(BorderEdge::thin()));

        let cell = ws.cell_at(1, 1).unwrap();
        assert!(cell.font.as_ref().unwrap().bold);
        assert!(cell.border.is_some());
        assert!(cell.has_style());
    }

    #[test]
    fn test_row_column_sizes() {
        let mut ws = Worksheet::new("Test");
        ws.set_row_height(5, 30.0).unwrap();
        ws.set_column_width(3, 20.0).unwrap();

        assert_eq!(ws.row_height(5), Some(30.0));
        assert_eq!(ws.column_width(3), Some(20.0));
        assert_eq!(ws.column_width(4), None);

        ws.column_mut(3).unwrap().width = Some(12.0);
        assert_eq!(ws.column_width(3), Some(12.0));
        assert_eq!(ws.columns().count(), 1);
    }

    #[test]
    fn test_merge_cells() {
        let mut ws = Worksheet::new("Test");

        ws.merge_cells(CellRange::parse("A1:C3").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 1);
        assert_eq!(ws.merged_region_at(2, 2).unwrap().to_string(), "A1:C3");

        // Can't merge overlapping
        let err = ws.merge_cells(CellRange::parse("B2:D4").unwrap());
        assert!(matches!(err, Err(Error::MergedCellConflict(_))));
        assert_eq!(ws.merged_regions().len(), 1);
    }

    #[test]
    fn test_used_range() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.used_range().is_none());

        ws.cell_at_mut(6, 2).unwrap();
        ws.cell_at_mut(9, 3).unwrap();
        ws.cell_at_mut(4, 3).unwrap();
        assert_eq!(ws.used_range().unwrap().to_string(), "B4:C9");
    }

    #[test]
    fn test_cells_row_major() {
        let mut ws = Worksheet::new("Test");
        ws.cell_at_mut(2, 1).unwrap();
        ws.cell_at_mut(1, 2).unwrap();
        ws.cell_at_mut(1, 1).unwrap();

        let order: Vec<String> = ws.cells().map(|(addr, _)| addr.to_string()).collect();
        assert_eq!(order, vec!["A1", "B1", "A2"]);
    }
}
