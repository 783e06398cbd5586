//! Writes worksheets to disk through the public API

use passport_sheet::{
    Alignment, Border, BorderEdge, BorderLineStyle, CellRange, CellValue, Color, Fill, Font,
    HorizontalAlignment, Worksheet,
};
use passport_xlsx::{export_file_name, ExportOptions, XlsxWriter};

fn passport_sheet() -> Worksheet {
    let mut sheet = Worksheet::new("Паспорт");

    let title = sheet.cell_at_mut(1, 1).unwrap();
    title.value = CellValue::from("Паспорт изделия");
    title.font = Some(Font::new().with_name("Arial").with_size(14.0).with_bold(true));
    title.alignment = Some(Alignment {
        horizontal: Some(HorizontalAlignment::Center),
        ..Default::default()
    });
    sheet.merge_cells(CellRange::from_coords(1, 1, 1, 4)).unwrap();

    let header = sheet.cell_at_mut(6, 2).unwrap();
    header.value = CellValue::from("Наименование");
    header.fill = Some(Fill::solid(Color::rgb(0xD9, 0xD9, 0xD9)));
    header.border = Some(Border::all(BorderEdge::new(
        BorderLineStyle::Medium,
        Some(Color::BLACK),
    )));

    sheet.set_column_width(2, 36.0).unwrap();
    sheet
}

#[test]
fn test_write_file_to_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions::default();
    let path = dir.path().join(export_file_name(&options.file_name_prefix, "INV-000042", 1));

    XlsxWriter::write_file(&passport_sheet(), &path, &options).unwrap();

    assert!(path.ends_with("passport_INV-000042_v1.xlsx"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 100, "workbook should not be empty");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_same_sheet_serializes_each_time() {
    let sheet = passport_sheet();
    let options = ExportOptions::default().with_date_format("dd.mm.yyyy");

    let first = XlsxWriter::write_bytes(&sheet, &options).unwrap();
    let second = XlsxWriter::write_bytes(&sheet, &options).unwrap();

    assert!(first.starts_with(b"PK"));
    assert!(second.starts_with(b"PK"));
}
