//! Table section writer
//!
//! A table section turns an array of records into a rectangular block: an
//! optional header row followed by one row per record. The row count is
//! floored by `minRows` and capped by `maxRows`; with grid fill on, a capped
//! section always renders exactly `maxRows` rows so printed forms keep a
//! ruled table however little data there is.

use passport_sheet::{Border, CellAddress, CellValue, Error, Result, Worksheet, MAX_COLS};
use passport_template::{
    CellStyle, FieldDefinition, ItemKind, ItemRef, Passport, TableColumn, TableSection, Template,
};
use serde_json::Value;

use crate::render::write_cell;
use crate::report::{RenderReport, SkipReason};
use crate::style::grid_border;
use crate::value::format_table_cell;

/// Number of data rows a table section renders
///
/// A `max_rows` of zero counts as unset.
///
/// ```rust
/// use passport_render::rows_to_render;
///
/// // two records, floor 1, cap 3, grid fill: always the full three rows
/// assert_eq!(rows_to_render(2, Some(1), Some(3), true, true), 3);
/// // without a visible grid only the data rows are drawn
/// assert_eq!(rows_to_render(2, Some(1), Some(3), true, false), 2);
/// // surplus records are truncated
/// assert_eq!(rows_to_render(5, None, Some(3), false, false), 3);
/// ```
pub fn rows_to_render(
    provided: usize,
    min_rows: Option<u32>,
    max_rows: Option<u32>,
    fill_empty_rows_with_grid: bool,
    show_grid: bool,
) -> usize {
    let min = min_rows.unwrap_or(0) as usize;
    let max = max_rows.filter(|m| *m > 0).map(|m| m as usize);

    let effective = provided.max(min);
    let limited = max.map_or(effective, |m| effective.min(m));

    match max {
        Some(m) if fill_empty_rows_with_grid && show_grid => m,
        _ => limited,
    }
}

pub(crate) fn write_tables(
    sheet: &mut Worksheet,
    template: &Template,
    passport: &Passport,
    sections: &[TableSection],
    report: &mut RenderReport,
) {
    for (index, section) in sections.iter().enumerate() {
        let item = ItemRef {
            kind: ItemKind::Table,
            index,
        };

        let Some(field) = template.field(&section.field_key) else {
            report.skip(item, SkipReason::UnknownField(section.field_key.clone()));
            continue;
        };
        let Some(records) = passport.value(&section.field_key).and_then(Value::as_array) else {
            report.skip(item, SkipReason::NotAnArray(section.field_key.clone()));
            continue;
        };

        match write_table(sheet, field, section, records) {
            Ok(rows) => {
                log::debug!("{} ('{}'): {} data rows", item, section.field_key, rows);
                report.tables += 1;
                report.table_rows += rows;
            }
            Err(err) => {
                log::warn!("{} ('{}') not written: {}", item, section.field_key, err);
                report.skip(item, SkipReason::InvalidCoordinate(err.to_string()));
            }
        }
    }
}

fn write_table(
    sheet: &mut Worksheet,
    field: &FieldDefinition,
    section: &TableSection,
    records: &[Value],
) -> Result<usize> {
    let total = rows_to_render(
        records.len(),
        section.min_rows.or(field.min_rows),
        section.max_rows.or(field.max_rows),
        section.fills_empty_rows_with_grid(),
        section.show_grid,
    );
    let grid = section.show_grid.then(|| grid_border(section.grid_style.as_ref()));

    // Check the whole block up front so a section never renders halfway.
    CellAddress::validate(section.row, section.col)?;
    let first_row = section.first_data_row();
    if !section.columns.is_empty() {
        let last_col = column_at(section.col, section.columns.len() - 1)?;
        let rows = u32::try_from(total).unwrap_or(u32::MAX);
        let last_row = first_row.saturating_add(rows.saturating_sub(1));
        CellAddress::validate(last_row, last_col)?;
    }

    if section.draw_header {
        for (i, column) in section.columns.iter().enumerate() {
            let col = column_at(section.col, i)?;
            if let Some(width) = column.width {
                sheet.set_column_width(col, width)?;
            }
            let style = column.header_style.as_ref().or(section.header_style.as_ref());
            let title = CellValue::String(header_title(field, column));
            write_table_cell(sheet, section.row, col, title, style, grid.as_ref())?;
        }
    }

    if section.columns.is_empty() {
        return Ok(total);
    }
    for r in 0..total {
        let record = records.get(r).and_then(Value::as_object);
        let row = first_row + r as u32;
        for (i, column) in section.columns.iter().enumerate() {
            let col = column_at(section.col, i)?;
            let value = format_table_cell(record.and_then(|rec| rec.get(&column.key)));
            let style = column.style.as_ref().or(section.row_style.as_ref());
            write_table_cell(sheet, row, col, value, style, grid.as_ref())?;
        }
    }

    Ok(total)
}

fn write_table_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: CellValue,
    style: Option<&CellStyle>,
    grid: Option<&Border>,
) -> Result<()> {
    write_cell(sheet, row, col, value, style)?;
    if let Some(border) = grid {
        sheet.cell_at_mut(row, col)?.border = Some(border.clone());
    }
    Ok(())
}

fn header_title(field: &FieldDefinition, column: &TableColumn) -> String {
    column
        .title
        .clone()
        .or_else(|| field.column(&column.key).map(|def| def.title.clone()))
        .unwrap_or_else(|| column.key.clone())
}

fn column_at(start: u16, offset: usize) -> Result<u16> {
    u16::try_from(offset)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .ok_or(Error::ColumnOutOfBounds(u16::MAX, MAX_COLS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_sheet::{BorderEdge, BorderLineStyle, Color};
    use passport_template::{BorderEdgeSpec, ColumnDefinition, ColumnType, FieldType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn components_field() -> FieldDefinition {
        let mut field = FieldDefinition::new("components", "Комплектность", FieldType::Table);
        field.columns = vec![
            ColumnDefinition {
                key: "name".into(),
                title: "Наименование".into(),
                column_type: ColumnType::Text,
            },
            ColumnDefinition {
                key: "qty".into(),
                title: "Кол-во".into(),
                column_type: ColumnType::Number,
            },
        ];
        field.min_rows = Some(1);
        field.max_rows = Some(3);
        field
    }

    fn section() -> TableSection {
        let mut section = TableSection::new("components", 6, 2);
        section.draw_header = true;
        section.show_grid = true;
        section.columns = vec![TableColumn::new("name"), TableColumn::new("qty")];
        section
    }

    fn render(section: &TableSection, value: Value) -> (Worksheet, RenderReport) {
        let mut template = Template::new("Controller");
        template.fields = vec![components_field()];
        let passport = Passport::new("INV-1").with_value("components", value);

        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_tables(&mut sheet, &template, &passport, std::slice::from_ref(section), &mut report);
        (sheet, report)
    }

    fn two_components() -> Value {
        json!([
            {"name": "Контроллер", "qty": 1},
            {"name": "Адаптер питания", "qty": 2}
        ])
    }

    #[test]
    fn test_rows_to_render() {
        assert_eq!(rows_to_render(0, None, None, true, true), 0);
        assert_eq!(rows_to_render(0, Some(2), None, true, true), 2);
        assert_eq!(rows_to_render(4, Some(1), Some(0), true, true), 4);
        assert_eq!(rows_to_render(1, None, Some(5), false, true), 1);
        assert_eq!(rows_to_render(7, Some(1), Some(5), true, true), 5);
    }

    #[test]
    fn test_header_and_data() {
        let (sheet, report) = render(&section(), two_components());

        assert_eq!(sheet.value("B6").unwrap(), CellValue::from("Наименование"));
        assert_eq!(sheet.value("C6").unwrap(), CellValue::from("Кол-во"));
        assert_eq!(sheet.value("B7").unwrap(), CellValue::from("Контроллер"));
        assert_eq!(sheet.value("C7").unwrap(), CellValue::Number(1.0));
        assert_eq!(sheet.value("B8").unwrap(), CellValue::from("Адаптер питания"));
        assert_eq!(sheet.value("C8").unwrap(), CellValue::Number(2.0));
        assert_eq!(report.tables, 1);
        assert_eq!(report.table_rows, 3);
    }

    #[test]
    fn test_grid_fill_pads_to_max_rows() {
        let (sheet, _) = render(&section(), two_components());

        let padding = sheet.cell("B9").unwrap().unwrap();
        assert_eq!(padding.value, CellValue::from(""));
        assert_eq!(padding.border, Some(Border::all(BorderEdge::thin())));

        for row in 6..=9 {
            for col in 2..=3 {
                let cell = sheet.cell_at(row, col).unwrap();
                assert_eq!(cell.border, Some(Border::all(BorderEdge::thin())));
            }
        }
        assert!(sheet.cell_at(10, 2).is_none());
    }

    #[test]
    fn test_without_grid_renders_only_data() {
        let mut section = section();
        section.show_grid = false;

        let (sheet, report) = render(&section, two_components());

        assert!(sheet.cell_at(9, 2).is_none());
        assert!(sheet.cell_at(7, 2).unwrap().border.is_none());
        assert_eq!(report.table_rows, 2);
    }

    #[test]
    fn test_surplus_records_truncated() {
        let records = json!([{"name": "a"}, {"name": "b"}, {"name": "c"}, {"name": "d"}]);
        let (sheet, _) = render(&section(), records);

        assert_eq!(sheet.value("B9").unwrap(), CellValue::from("c"));
        assert!(sheet.cell_at(10, 2).is_none());
    }

    #[test]
    fn test_grid_style_overrides_style_border() {
        let mut section = section();
        section.grid_style = Some(BorderEdgeSpec::new("medium", "#FF0000"));
        section.row_style = Some(CellStyle {
            border: Some(passport_template::BorderSpec {
                top: Some(BorderEdgeSpec::new("double", "#000000")),
                ..Default::default()
            }),
            ..Default::default()
        });

        let (sheet, _) = render(&section, two_components());

        let edge = BorderEdge::new(BorderLineStyle::Medium, Some(Color::rgb(255, 0, 0)));
        assert_eq!(sheet.cell_at(7, 2).unwrap().border, Some(Border::all(edge)));
    }

    #[test]
    fn test_column_width_and_title_override() {
        let mut section = section();
        section.columns[0].width = Some(40.0);
        section.columns[1].title = Some("Qty".into());

        let (sheet, _) = render(&section, two_components());

        assert_eq!(sheet.column_width(2), Some(40.0));
        assert_eq!(sheet.value("C6").unwrap(), CellValue::from("Qty"));
    }

    #[test]
    fn test_title_falls_back_to_key() {
        let mut section = section();
        section.columns.push(TableColumn::new("serial"));

        let (sheet, _) = render(&section, two_components());
        assert_eq!(sheet.value("D6").unwrap(), CellValue::from("serial"));
    }

    #[test]
    fn test_non_array_value_skips_section() {
        let (sheet, report) = render(&section(), json!("not a table"));

        assert_eq!(sheet.cell_count(), 0);
        assert_eq!(report.tables, 0);
        assert_eq!(report.skipped[0].reason, SkipReason::NotAnArray("components".into()));
    }

    #[test]
    fn test_block_past_sheet_edge_is_skipped_whole() {
        let mut section = section();
        section.col = MAX_COLS;

        let (sheet, report) = render(&section, two_components());

        assert_eq!(sheet.cell_count(), 0);
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidCoordinate(_)));
    }
}
