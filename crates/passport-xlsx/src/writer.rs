//! XLSX writer

use std::io::Write;
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use passport_sheet::{Cell, CellValue, Worksheet};
use rust_xlsxwriter::Workbook;

use crate::error::XlsxResult;
use crate::naming::sanitize_sheet_name;
use crate::options::ExportOptions;
use crate::styles::FormatTable;

/// `NaiveDate::num_days_from_ce` of 1899-12-30, day zero of spreadsheet serials
const SERIAL_EPOCH_DAYS_FROM_CE: i32 = 693_594;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a worksheet to a file path
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Worksheet,
        path: P,
        options: &ExportOptions,
    ) -> XlsxResult<()> {
        let bytes = Self::write_bytes(sheet, options)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write a worksheet to a writer
    pub fn write<W: Write>(
        sheet: &Worksheet,
        mut writer: W,
        options: &ExportOptions,
    ) -> XlsxResult<()> {
        let bytes = Self::write_bytes(sheet, options)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a worksheet into the bytes of a single-sheet workbook
    pub fn write_bytes(sheet: &Worksheet, options: &ExportOptions) -> XlsxResult<Vec<u8>> {
        let mut workbook = Self::build_workbook(sheet, options)?;
        let bytes = workbook.save_to_buffer()?;
        log::debug!("sheet '{}' serialized to {} bytes", sheet.name(), bytes.len());
        Ok(bytes)
    }

    fn build_workbook(sheet: &Worksheet, options: &ExportOptions) -> XlsxResult<Workbook> {
        let mut workbook = Workbook::new();
        let mut formats = FormatTable::new(options);

        let target = workbook.add_worksheet();
        target.set_name(sanitize_sheet_name(sheet.name()))?;

        // The model is 1-based, the workbook writer 0-based.
        for column in sheet.columns() {
            if let Some(width) = column.width {
                target.set_column_width(column.index - 1, width)?;
            }
        }
        for row in sheet.rows() {
            if let Some(height) = row.height {
                target.set_row_height(row.index - 1, height)?;
            }
        }

        // Merges go first: merging blanks the anchor, the cell pass below
        // then writes its value.
        let blank = Cell::new();
        for range in sheet.merged_regions() {
            let anchor = sheet.cell_at(range.start.row, range.start.col).unwrap_or(&blank);
            target.merge_range(
                range.start.row - 1,
                range.start.col - 1,
                range.end.row - 1,
                range.end.col - 1,
                "",
                formats.format_for(anchor),
            )?;
        }

        for (address, cell) in sheet.cells() {
            let (row, col) = (address.row - 1, address.col - 1);
            let format = formats.format_for(cell);
            match &cell.value {
                CellValue::Empty => {
                    target.write_blank(row, col, format)?;
                }
                CellValue::String(text) if text.is_empty() => {
                    target.write_blank(row, col, format)?;
                }
                CellValue::String(text) => {
                    target.write_string_with_format(row, col, text, format)?;
                }
                CellValue::Number(number) => {
                    target.write_number_with_format(row, col, *number, format)?;
                }
                CellValue::Boolean(flag) => {
                    target.write_boolean_with_format(row, col, *flag, format)?;
                }
                CellValue::Date(date) => {
                    target.write_number_with_format(row, col, date_serial(*date), format)?;
                }
                CellValue::DateTime(stamp) => {
                    target.write_number_with_format(row, col, datetime_serial(*stamp), format)?;
                }
            }
        }

        log::debug!(
            "sheet '{}': {} cells, {} merges, {} formats",
            sheet.name(),
            sheet.cell_count(),
            sheet.merged_regions().len(),
            formats.len()
        );
        Ok(workbook)
    }
}

/// Spreadsheet serial number of a date (days since 1899-12-30)
///
/// Exact for dates from 1900-03-01 on; earlier dates are off by one in
/// spreadsheet applications because of the 1900 leap-year quirk.
pub fn date_serial(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce() - SERIAL_EPOCH_DAYS_FROM_CE)
}

/// Spreadsheet serial number of a date-time (fractional days)
pub fn datetime_serial(stamp: NaiveDateTime) -> f64 {
    let time = stamp.time();
    let seconds =
        f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond()) / 1e9;
    date_serial(stamp.date()) + seconds / SECONDS_PER_DAY
}
