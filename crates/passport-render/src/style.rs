//! Cell style mapper
//!
//! Turns the abstract [`CellStyle`] written in templates into concrete cell
//! attributes. Each present sub-object replaces the matching attribute on the
//! cell and absent ones leave it alone, so a table grid can add borders to a
//! cell whose font a column style already set.
//!
//! Malformed colors and unknown keywords are dropped rather than reported:
//! the rest of the style still applies.

use passport_sheet::{
    Alignment, Border, BorderEdge, BorderLineStyle, Cell, Color, Fill, Font, HorizontalAlignment,
    Underline, VerticalAlignment,
};
use passport_template::{
    AlignmentSpec, BorderEdgeSpec, BorderSpec, CellStyle, FontSpec, UnderlineSpec,
};

/// Apply a template style to a cell
pub fn apply_style(cell: &mut Cell, style: &CellStyle) {
    if let Some(font) = &style.font {
        cell.font = Some(map_font(font));
    }
    if let Some(alignment) = &style.alignment {
        cell.alignment = Some(map_alignment(alignment));
    }
    if let Some(border) = &style.border {
        cell.border = Some(map_border(border));
    }
    if let Some(color) = style.fill_color.as_deref().and_then(parse_color) {
        cell.fill = Some(Fill::solid(color));
    }
    if let Some(format) = &style.number_format {
        cell.num_fmt = Some(format.clone());
    }
}

/// Parse a template color, logging and dropping malformed ones
pub fn parse_color(text: &str) -> Option<Color> {
    let color = Color::from_hex(text);
    if color.is_none() {
        log::debug!("ignoring malformed color '{}'", text);
    }
    color
}

pub fn map_font(spec: &FontSpec) -> Font {
    Font {
        name: spec.name.clone(),
        size: spec.size,
        bold: spec.bold.unwrap_or(false),
        italic: spec.italic.unwrap_or(false),
        underline: spec.underline.as_ref().map_or(Underline::None, map_underline),
        color: spec.color.as_deref().and_then(parse_color),
    }
}

fn map_underline(spec: &UnderlineSpec) -> Underline {
    match spec {
        UnderlineSpec::Flag(true) => Underline::Single,
        UnderlineSpec::Flag(false) => Underline::None,
        UnderlineSpec::Keyword(keyword) => Underline::from_keyword(keyword).unwrap_or_else(|| {
            log::debug!("ignoring unknown underline '{}'", keyword);
            Underline::None
        }),
    }
}

pub fn map_alignment(spec: &AlignmentSpec) -> Alignment {
    let horizontal = spec.horizontal.as_deref().and_then(|keyword| {
        let parsed = HorizontalAlignment::from_keyword(keyword);
        if parsed.is_none() {
            log::debug!("ignoring unknown horizontal alignment '{}'", keyword);
        }
        parsed
    });
    let vertical = spec.vertical.as_deref().and_then(|keyword| {
        let parsed = VerticalAlignment::from_keyword(keyword);
        if parsed.is_none() {
            log::debug!("ignoring unknown vertical alignment '{}'", keyword);
        }
        parsed
    });

    Alignment {
        horizontal,
        vertical,
        wrap_text: spec.wrap_text.unwrap_or(false),
    }
}

pub fn map_border(spec: &BorderSpec) -> Border {
    Border {
        top: spec.top.as_ref().and_then(map_edge),
        bottom: spec.bottom.as_ref().and_then(map_edge),
        left: spec.left.as_ref().and_then(map_edge),
        right: spec.right.as_ref().and_then(map_edge),
    }
}

/// An edge without a recognizable line style draws nothing
pub fn map_edge(spec: &BorderEdgeSpec) -> Option<BorderEdge> {
    let keyword = spec.style.as_deref()?;
    let Some(style) = BorderLineStyle::from_keyword(keyword) else {
        log::debug!("ignoring unknown border style '{}'", keyword);
        return None;
    };
    Some(BorderEdge::new(style, spec.color.as_deref().and_then(parse_color)))
}

/// Border drawn on every table cell when a section shows its grid
///
/// Defaults to a thin black line; a grid style may override either part.
pub fn grid_border(spec: Option<&BorderEdgeSpec>) -> Border {
    let style = spec
        .and_then(|s| s.style.as_deref())
        .and_then(BorderLineStyle::from_keyword)
        .unwrap_or(BorderLineStyle::Thin);
    let color = spec
        .and_then(|s| s.color.as_deref())
        .and_then(parse_color)
        .unwrap_or(Color::BLACK);

    Border::all(BorderEdge::new(style, Some(color)))
}
