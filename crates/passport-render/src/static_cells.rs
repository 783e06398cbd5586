//! Static cell writer

use passport_sheet::Worksheet;
use passport_template::{ItemKind, ItemRef, StaticCell};

use crate::render::{merge_span, write_cell};
use crate::report::{RenderReport, SkipReason};
use crate::value::json_to_cell;

/// Write literal labels and captions in layout order
pub(crate) fn write_static_cells(
    sheet: &mut Worksheet,
    cells: &[StaticCell],
    report: &mut RenderReport,
) {
    for (index, cell) in cells.iter().enumerate() {
        let item = ItemRef {
            kind: ItemKind::StaticCell,
            index,
        };

        let value = json_to_cell(&cell.value);
        if let Err(err) = write_cell(sheet, cell.row, cell.col, value, cell.style.as_ref()) {
            log::warn!("{} not written: {}", item, err);
            report.skip(item, SkipReason::InvalidCoordinate(err.to_string()));
            continue;
        }
        report.static_cells += 1;

        merge_span(sheet, item, cell.row, cell.col, cell.merge.as_ref(), report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passport_sheet::{CellRange, CellValue};
    use passport_template::{CellStyle, Merge};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn label(row: u32, col: u16, text: &str) -> StaticCell {
        StaticCell {
            row,
            col,
            value: Value::from(text),
            style: None,
            merge: None,
        }
    }

    #[test]
    fn test_writes_value_and_style() {
        let mut title = label(1, 1, "Паспорт изделия");
        title.style = Some(CellStyle::bold(true));
        title.merge = Some(Merge::new(1, 4));

        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_static_cells(&mut sheet, &[title], &mut report);

        assert_eq!(sheet.value("A1").unwrap(), CellValue::from("Паспорт изделия"));
        assert!(sheet.cell_at(1, 1).unwrap().font.as_ref().unwrap().bold);
        assert_eq!(sheet.merged_regions(), &[CellRange::from_coords(1, 1, 1, 4)]);
        assert_eq!(report.static_cells, 1);
        assert_eq!(report.merges, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_later_cell_overwrites_earlier() {
        let cells = vec![label(2, 2, "first"), label(2, 2, "second")];

        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_static_cells(&mut sheet, &cells, &mut report);

        assert_eq!(sheet.value("B2").unwrap(), CellValue::from("second"));
    }

    #[test]
    fn test_zero_coordinate_is_skipped() {
        let cells = vec![label(0, 1, "lost"), label(1, 1, "kept")];

        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_static_cells(&mut sheet, &cells, &mut report);

        assert_eq!(sheet.cell_count(), 1);
        assert_eq!(report.static_cells, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].item.index, 0);
    }

    #[test]
    fn test_conflicting_merge_keeps_value() {
        let mut first = label(1, 1, "a");
        first.merge = Some(Merge::new(2, 2));
        let mut second = label(2, 2, "b");
        second.merge = Some(Merge::new(1, 2));

        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_static_cells(&mut sheet, &[first, second], &mut report);

        assert_eq!(sheet.value("B2").unwrap(), CellValue::from("b"));
        assert_eq!(sheet.merged_regions().len(), 1);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::MergeConflict(CellRange::from_coords(2, 2, 2, 3))
        );
    }
}
