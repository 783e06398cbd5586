//! Workbook format table
//!
//! Cells with identical style attributes share one `rust_xlsxwriter::Format`.

use ahash::AHashMap;
use passport_sheet::{
    Alignment, Border, BorderEdge, BorderLineStyle, Cell, CellValue, Color, Fill, Font,
    HorizontalAlignment, Underline, VerticalAlignment,
};
use rust_xlsxwriter::{Color as XlsxColor, Format, FormatAlign, FormatBorder, FormatUnderline};

use crate::options::ExportOptions;

/// Style attributes that decide a cell's format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
struct FormatKey {
    font: Option<Font>,
    alignment: Option<Alignment>,
    border: Option<Border>,
    fill: Option<Fill>,
    num_fmt: Option<String>,
}

/// Formats built so far, keyed by style attributes
pub(crate) struct FormatTable {
    formats: AHashMap<FormatKey, Format>,
    date_format: String,
    datetime_format: String,
}

impl FormatTable {
    pub(crate) fn new(options: &ExportOptions) -> Self {
        Self {
            formats: AHashMap::with_capacity(16),
            date_format: options.default_date_format.clone(),
            datetime_format: options.default_datetime_format.clone(),
        }
    }

    /// Format for a cell, built on first use
    ///
    /// Date cells without a number format get the configured default so they
    /// do not show up as bare serial numbers.
    pub(crate) fn format_for(&mut self, cell: &Cell) -> &Format {
        let num_fmt = cell.num_fmt.clone().or_else(|| match cell.value {
            CellValue::Date(_) => Some(self.date_format.clone()),
            CellValue::DateTime(_) => Some(self.datetime_format.clone()),
            _ => None,
        });
        let key = FormatKey {
            font: cell.font.clone(),
            alignment: cell.alignment.clone(),
            border: cell.border.clone(),
            fill: cell.fill,
            num_fmt,
        };

        self.formats.entry(key).or_insert_with_key(build_format)
    }

    /// Number of distinct formats
    pub(crate) fn len(&self) -> usize {
        self.formats.len()
    }
}

fn build_format(key: &FormatKey) -> Format {
    let mut format = Format::new();
    if let Some(font) = &key.font {
        format = apply_font(format, font);
    }
    if let Some(alignment) = &key.alignment {
        format = apply_alignment(format, alignment);
    }
    if let Some(border) = &key.border {
        format = apply_border(format, border);
    }
    if let Some(fill) = &key.fill {
        format = format.set_background_color(xlsx_color(fill.color));
    }
    if let Some(num_fmt) = &key.num_fmt {
        format = format.set_num_format(num_fmt);
    }
    format
}

fn xlsx_color(color: Color) -> XlsxColor {
    XlsxColor::RGB(color.to_rgb_u32())
}

fn apply_font(mut format: Format, font: &Font) -> Format {
    if let Some(name) = &font.name {
        format = format.set_font_name(name);
    }
    if let Some(size) = font.size {
        format = format.set_font_size(size);
    }
    if font.bold {
        format = format.set_bold();
    }
    if font.italic {
        format = format.set_italic();
    }
    format = match font.underline {
        Underline::None => format,
        Underline::Single => format.set_underline(FormatUnderline::Single),
        Underline::Double => format.set_underline(FormatUnderline::Double),
        Underline::SingleAccounting => format.set_underline(FormatUnderline::SingleAccounting),
        Underline::DoubleAccounting => format.set_underline(FormatUnderline::DoubleAccounting),
    };
    if let Some(color) = font.color {
        format = format.set_font_color(xlsx_color(color));
    }
    format
}

fn apply_alignment(mut format: Format, alignment: &Alignment) -> Format {
    if let Some(horizontal) = alignment.horizontal {
        format = format.set_align(match horizontal {
            HorizontalAlignment::Left => FormatAlign::Left,
            HorizontalAlignment::Center => FormatAlign::Center,
            HorizontalAlignment::Right => FormatAlign::Right,
            HorizontalAlignment::Fill => FormatAlign::Fill,
            HorizontalAlignment::Justify => FormatAlign::Justify,
            HorizontalAlignment::CenterContinuous => FormatAlign::CenterAcross,
            HorizontalAlignment::Distributed => FormatAlign::Distributed,
        });
    }
    if let Some(vertical) = alignment.vertical {
        format = format.set_align(match vertical {
            VerticalAlignment::Top => FormatAlign::Top,
            VerticalAlignment::Middle => FormatAlign::VerticalCenter,
            VerticalAlignment::Bottom => FormatAlign::Bottom,
            VerticalAlignment::Justify => FormatAlign::VerticalJustify,
            VerticalAlignment::Distributed => FormatAlign::VerticalDistributed,
        });
    }
    if alignment.wrap_text {
        format = format.set_text_wrap();
    }
    format
}

fn apply_border(mut format: Format, border: &Border) -> Format {
    if let Some(edge) = border.top {
        format = format.set_border_top(line_style(edge));
        if let Some(color) = edge.color {
            format = format.set_border_top_color(xlsx_color(color));
        }
    }
    if let Some(edge) = border.bottom {
        format = format.set_border_bottom(line_style(edge));
        if let Some(color) = edge.color {
            format = format.set_border_bottom_color(xlsx_color(color));
        }
    }
    if let Some(edge) = border.left {
        format = format.set_border_left(line_style(edge));
        if let Some(color) = edge.color {
            format = format.set_border_left_color(xlsx_color(color));
        }
    }
    if let Some(edge) = border.right {
        format = format.set_border_right(line_style(edge));
        if let Some(color) = edge.color {
            format = format.set_border_right_color(xlsx_color(color));
        }
    }
    format
}

fn line_style(edge: BorderEdge) -> FormatBorder {
    match edge.style {
        BorderLineStyle::Thin => FormatBorder::Thin,
        BorderLineStyle::Medium => FormatBorder::Medium,
        BorderLineStyle::Thick => FormatBorder::Thick,
        BorderLineStyle::Dashed => FormatBorder::Dashed,
        BorderLineStyle::Dotted => FormatBorder::Dotted,
        BorderLineStyle::Double => FormatBorder::Double,
        BorderLineStyle::Hair => FormatBorder::Hair,
        BorderLineStyle::MediumDashed => FormatBorder::MediumDashed,
        BorderLineStyle::DashDot => FormatBorder::DashDot,
        BorderLineStyle::MediumDashDot => FormatBorder::MediumDashDot,
        BorderLineStyle::DashDotDot => FormatBorder::DashDotDot,
        BorderLineStyle::MediumDashDotDot => FormatBorder::MediumDashDotDot,
        BorderLineStyle::SlantDashDot => FormatBorder::SlantDashDot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bold_cell(value: CellValue) -> Cell {
        let mut cell = Cell::new();
        cell.value = value;
        cell.font = Some(Font::new().with_bold(true));
        cell
    }

    #[test]
    fn test_identical_styles_share_a_format() {
        let mut table = FormatTable::new(&ExportOptions::default());
        table.format_for(&bold_cell(CellValue::from("a")));
        table.format_for(&bold_cell(CellValue::Number(1.0)));
        table.format_for(&Cell::new());

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_dates_get_default_format() {
        let mut table = FormatTable::new(&ExportOptions::default());
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let mut formatted = Cell::new();
        formatted.value = CellValue::Date(date);
        formatted.num_fmt = Some("dd.mm.yyyy".into());

        table.format_for(&Cell::new());
        table.format_for(&formatted);
        table.format_for(&Cell {
            value: CellValue::Date(date),
            ..Cell::new()
        });
        table.format_for(&Cell {
            value: CellValue::Date(date.succ_opt().unwrap()),
            ..Cell::new()
        });

        // blank, dd.mm.yyyy and the default date format
        assert_eq!(table.len(), 3);
    }
}
