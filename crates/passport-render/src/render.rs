//! Layout orchestration

use passport_sheet::{CellRange, CellValue, Error, Worksheet};
use passport_template::{CellStyle, ItemRef, Layout, Merge, Passport, Template};

use crate::bindings::write_bindings;
use crate::error::{RenderError, RenderResult};
use crate::report::{RenderReport, SkipReason};
use crate::static_cells::write_static_cells;
use crate::style::apply_style;
use crate::tables::write_tables;

/// Render a passport onto a fresh worksheet
pub fn render(template: &Template, passport: &Passport) -> RenderResult<Worksheet> {
    render_with_report(template, passport).map(|(sheet, _)| sheet)
}

/// Render a passport onto a fresh worksheet, returning what was skipped
pub fn render_with_report(
    template: &Template,
    passport: &Passport,
) -> RenderResult<(Worksheet, RenderReport)> {
    let mut sheet = Worksheet::new(sheet_name(template));
    let report = render_into(template, passport, &mut sheet)?;
    Ok((sheet, report))
}

/// Render a passport onto an existing worksheet
///
/// Items are applied in a fixed order: size overrides, static cells,
/// bindings, then table sections. Later items overwrite earlier ones where
/// they share a cell.
pub fn render_into(
    template: &Template,
    passport: &Passport,
    sheet: &mut Worksheet,
) -> RenderResult<RenderReport> {
    let layout = template
        .layout
        .as_ref()
        .ok_or_else(|| RenderError::MissingLayout(template.name.clone()))?;

    log::debug!(
        "rendering '{}' for asset '{}' onto sheet '{}'",
        template.name,
        passport.asset_tag,
        sheet.name()
    );

    let mut report = RenderReport::default();
    apply_dimensions(sheet, layout);
    write_static_cells(sheet, &layout.static_cells, &mut report);
    write_bindings(sheet, template, passport, &layout.bindings, &mut report);
    write_tables(sheet, template, passport, &layout.tables, &mut report);

    log::debug!(
        "rendered {} static cells, {} bindings, {} tables ({} skipped)",
        report.static_cells,
        report.bindings,
        report.tables,
        report.skipped.len()
    );
    Ok(report)
}

/// Worksheet name: the layout's, else the template's, else `Sheet1`
pub fn sheet_name(template: &Template) -> String {
    template
        .layout
        .as_ref()
        .and_then(|layout| layout.sheet_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .or_else(|| Some(template.name.as_str()).filter(|name| !name.trim().is_empty()))
        .unwrap_or("Sheet1")
        .to_string()
}

fn apply_dimensions(sheet: &mut Worksheet, layout: &Layout) {
    for override_ in &layout.column_widths {
        if let Err(err) = sheet.set_column_width(override_.col, override_.width) {
            log::warn!("column width for column {} ignored: {}", override_.col, err);
        }
    }
    for override_ in &layout.row_heights {
        if let Err(err) = sheet.set_row_height(override_.row, override_.height) {
            log::warn!("row height for row {} ignored: {}", override_.row, err);
        }
    }
}

/// Write a value and layer a template style over the cell's attributes
pub(crate) fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: CellValue,
    style: Option<&CellStyle>,
) -> passport_sheet::Result<()> {
    let cell = sheet.cell_at_mut(row, col)?;
    cell.value = value;
    if let Some(style) = style {
        apply_style(cell, style);
    }
    Ok(())
}

/// Merge the span anchored at `(row, col)` when it covers more than one cell
pub(crate) fn merge_span(
    sheet: &mut Worksheet,
    item: ItemRef,
    row: u32,
    col: u16,
    merge: Option<&Merge>,
    report: &mut RenderReport,
) {
    let Some(merge) = merge.filter(|m| m.spans_multiple()) else {
        return;
    };

    let range = CellRange::from_span(row, col, merge.rows, merge.cols);
    match sheet.merge_cells(range) {
        Ok(()) => report.merges += 1,
        Err(Error::MergedCellConflict(_)) => {
            log::warn!("{}: merge {} overlaps an earlier merge", item, range);
            report.skip(item, SkipReason::MergeConflict(range));
        }
        Err(err) => {
            log::warn!("{}: merge {} not applied: {}", item, range, err);
            report.skip(item, SkipReason::InvalidCoordinate(err.to_string()));
        }
    }
}
