//! Border style types

use super::Color;

/// Border edges of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
}

impl Border {
    /// Create a border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four edges to the same line
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            top: Some(edge),
            bottom: Some(edge),
            left: Some(edge),
            right: Some(edge),
        }
    }

    /// Check if all edges are empty
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color (`None` = automatic)
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Option<Color>) -> Self {
        Self { style, color }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Some(Color::BLACK))
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// Thin line
    #[default]
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
    /// Medium dashed
    MediumDashed,
    /// Dash-dot
    DashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
}

impl BorderLineStyle {
    /// Parse a line style keyword, case-insensitively (`thin`, `mediumDashed`, ...)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let style = match keyword.to_ascii_lowercase().as_str() {
            "thin" => BorderLineStyle::Thin,
            "medium" => BorderLineStyle::Medium,
            "thick" => BorderLineStyle::Thick,
            "dashed" => BorderLineStyle::Dashed,
            "dotted" => BorderLineStyle::Dotted,
            "double" => BorderLineStyle::Double,
            "hair" => BorderLineStyle::Hair,
            "mediumdashed" => BorderLineStyle::MediumDashed,
            "dashdot" => BorderLineStyle::DashDot,
            "mediumdashdot" => BorderLineStyle::MediumDashDot,
            "dashdotdot" => BorderLineStyle::DashDotDot,
            "mediumdashdotdot" => BorderLineStyle::MediumDashDotDot,
            "slantdashdot" => BorderLineStyle::SlantDashDot,
            _ => return None,
        };
        Some(style)
    }
}
