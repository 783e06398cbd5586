//! Layout validation
//!
//! Rendering is deliberately tolerant: dangling field keys and overlapping
//! items never abort an export. This pass reports those situations up front
//! so template authors can fix them; nothing in the render path calls it.

use std::fmt;

use passport_sheet::CellRange;

use crate::field::FieldType;
use crate::layout::Merge;
use crate::template::Template;

/// Kind of layout item an issue points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    StaticCell,
    Binding,
    Table,
}

/// Position of an item inside its layout list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub index: usize,
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ItemKind::StaticCell => "static cell",
            ItemKind::Binding => "binding",
            ItemKind::Table => "table section",
        };
        write!(f, "{} #{}", kind, self.index + 1)
    }
}

/// A problem found in a template layout
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutIssue {
    /// The template has no layout; export is impossible
    MissingLayout,
    /// A binding or table section names a field the template lacks
    UnknownField { item: ItemRef, field_key: String },
    /// A binding targets a table field and will be ignored
    BindingToTableField { item: ItemRef, field_key: String },
    /// A table section targets a field that is not a table
    NotATableField { item: ItemRef, field_key: String },
    /// Row or column 0 (coordinates are 1-based)
    ZeroCoordinate { item: ItemRef },
    /// `minRows` exceeds `maxRows`
    InvertedRowBounds { item: ItemRef, min_rows: u32, max_rows: u32 },
    /// Two items write to the same cells
    Overlap { first: ItemRef, second: ItemRef, first_range: CellRange, second_range: CellRange },
}

impl LayoutIssue {
    /// Whether the issue prevents rendering altogether
    pub fn is_fatal(&self) -> bool {
        matches!(self, LayoutIssue::MissingLayout)
    }
}

impl fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutIssue::MissingLayout => write!(f, "template has no layout"),
            LayoutIssue::UnknownField { item, field_key } => {
                write!(f, "{} references unknown field '{}'", item, field_key)
            }
            LayoutIssue::BindingToTableField { item, field_key } => write!(
                f,
                "{} binds table field '{}'; tables render only through table sections",
                item, field_key
            ),
            LayoutIssue::NotATableField { item, field_key } => {
                write!(f, "{} uses non-table field '{}'", item, field_key)
            }
            LayoutIssue::ZeroCoordinate { item } => {
                write!(f, "{} has a zero row or column (coordinates are 1-based)", item)
            }
            LayoutIssue::InvertedRowBounds { item, min_rows, max_rows } => write!(
                f,
                "{} has minRows {} greater than maxRows {}",
                item, min_rows, max_rows
            ),
            LayoutIssue::Overlap { first, second, first_range, second_range } => write!(
                f,
                "{} ({}) overlaps {} ({})",
                first, first_range, second, second_range
            ),
        }
    }
}

/// Check a template's layout and return every issue found, in layout order
pub fn validate(template: &Template) -> Vec<LayoutIssue> {
    let Some(layout) = &template.layout else {
        return vec![LayoutIssue::MissingLayout];
    };

    let mut issues = Vec::new();
    let mut regions: Vec<(ItemRef, CellRange)> = Vec::new();

    for (index, cell) in layout.static_cells.iter().enumerate() {
        let item = ItemRef { kind: ItemKind::StaticCell, index };
        match merged_region(cell.row, cell.col, cell.merge) {
            Some(range) => regions.push((item, range)),
            None => issues.push(LayoutIssue::ZeroCoordinate { item }),
        }
    }

    for (index, binding) in layout.bindings.iter().enumerate() {
        let item = ItemRef { kind: ItemKind::Binding, index };
        let Some(field) = template.field(&binding.field_key) else {
            issues.push(LayoutIssue::UnknownField { item, field_key: binding.field_key.clone() });
            continue;
        };
        if field.field_type == FieldType::Table {
            issues.push(LayoutIssue::BindingToTableField {
                item,
                field_key: binding.field_key.clone(),
            });
            continue;
        }
        match merged_region(binding.row, binding.col, binding.merge) {
            Some(range) => regions.push((item, range)),
            None => issues.push(LayoutIssue::ZeroCoordinate { item }),
        }
    }

    for (index, section) in layout.tables.iter().enumerate() {
        let item = ItemRef { kind: ItemKind::Table, index };
        let Some(field) = template.field(&section.field_key) else {
            issues.push(LayoutIssue::UnknownField { item, field_key: section.field_key.clone() });
            continue;
        };
        if field.field_type != FieldType::Table {
            issues.push(LayoutIssue::NotATableField { item, field_key: section.field_key.clone() });
        }

        let min_rows = section.min_rows.or(field.min_rows);
        let max_rows = section.max_rows.or(field.max_rows);
        if let (Some(min_rows), Some(max_rows)) = (min_rows, max_rows) {
            if max_rows > 0 && min_rows > max_rows {
                issues.push(LayoutIssue::InvertedRowBounds { item, min_rows, max_rows });
            }
        }

        if section.row == 0 || section.col == 0 {
            issues.push(LayoutIssue::ZeroCoordinate { item });
            continue;
        }
        let body_rows = max_rows.filter(|m| *m > 0).or(min_rows).unwrap_or(1).max(1);
        let header_rows = u32::from(section.draw_header);
        let width = u16::try_from(section.columns.len().max(1)).unwrap_or(u16::MAX);
        let rows = header_rows.saturating_add(body_rows);
        regions.push((item, CellRange::from_span(section.row, section.col, rows, width)));
    }

    issues.extend(find_overlaps(&regions));
    issues
}

fn merged_region(row: u32, col: u16, merge: Option<Merge>) -> Option<CellRange> {
    if row == 0 || col == 0 {
        return None;
    }
    let merge = merge.unwrap_or(Merge::new(1, 1));
    Some(CellRange::from_span(row, col, merge.rows, merge.cols))
}

fn find_overlaps(regions: &[(ItemRef, CellRange)]) -> Vec<LayoutIssue> {
    let mut overlaps = Vec::new();
    for (i, (first, first_range)) in regions.iter().enumerate() {
        for (second, second_range) in &regions[i + 1..] {
            if first_range.overlaps(second_range) {
                overlaps.push(LayoutIssue::Overlap {
                    first: *first,
                    second: *second,
                    first_range: *first_range,
                    second_range: *second_range,
                });
            }
        }
    }
    overlaps
}
