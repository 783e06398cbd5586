//! Abstract style descriptions as authored in templates
//!
//! These mirror the JSON a template editor produces. Keywords and colors stay
//! as strings here; turning them into concrete cell attributes (and dropping
//! anything malformed) is the renderer's job.

use serde::{Deserialize, Serialize};

/// Style of a cell as written in a template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSpec>,
    /// Solid background color (`#RRGGBB`, `AARRGGBB`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Number format code, e.g. `dd.mm.yyyy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<UnderlineSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Underline given either as a flag or as a keyword (`"double"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnderlineSpec {
    Flag(bool),
    Keyword(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdgeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdgeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdgeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdgeSpec>,
}

/// One border line: keyword style plus color. Also used for table grids.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderEdgeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BorderEdgeSpec {
    /// Create an edge spec from a style keyword and color
    pub fn new<S: Into<String>, C: Into<String>>(style: S, color: C) -> Self {
        Self {
            style: Some(style.into()),
            color: Some(color.into()),
        }
    }
}

impl CellStyle {
    /// Style that only sets a number format
    pub fn number_format<S: Into<String>>(format: S) -> Self {
        Self {
            number_format: Some(format.into()),
            ..Default::default()
        }
    }

    /// Style that only sets bold on or off
    pub fn bold(bold: bool) -> Self {
        Self {
            font: Some(FontSpec {
                bold: Some(bold),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underline_flag_or_keyword() {
        let font: FontSpec = serde_json::from_str(r#"{"underline": true}"#).unwrap();
        assert_eq!(font.underline, Some(UnderlineSpec::Flag(true)));

        let font: FontSpec = serde_json::from_str(r#"{"underline": "double"}"#).unwrap();
        assert_eq!(font.underline, Some(UnderlineSpec::Keyword("double".into())));
    }

    #[test]
    fn test_style_roundtrip_keeps_absent_parts_absent() {
        let json = r##"{"border":{"left":{"style":"thin","color":"#000000"}},"numberFormat":"0.00"}"##;
        let style: CellStyle = serde_json::from_str(json).unwrap();
        assert!(style.font.is_none());
        assert!(style.border.as_ref().unwrap().top.is_none());
        assert_eq!(serde_json::to_string(&style).unwrap(), json);
    }
}
