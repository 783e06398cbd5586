//! Text alignment types

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment (`None` = general)
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment (`None` = bottom)
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text
    pub wrap_text: bool,
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Fill (repeat content to fill cell width)
    Fill,
    /// Justify (stretch to fit width)
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Distributed
    Distributed,
}

impl HorizontalAlignment {
    /// Parse a horizontal alignment keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let align = match keyword.to_ascii_lowercase().as_str() {
            "left" => HorizontalAlignment::Left,
            "center" | "centre" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            "fill" => HorizontalAlignment::Fill,
            "justify" => HorizontalAlignment::Justify,
            "centercontinuous" => HorizontalAlignment::CenterContinuous,
            "distributed" => HorizontalAlignment::Distributed,
            _ => return None,
        };
        Some(align)
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Top aligned
    Top,
    /// Center aligned
    Middle,
    /// Bottom aligned
    Bottom,
    /// Justify
    Justify,
    /// Distributed
    Distributed,
}

impl VerticalAlignment {
    /// Parse a vertical alignment keyword (`middle` and `center` are synonyms)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let align = match keyword.to_ascii_lowercase().as_str() {
            "top" => VerticalAlignment::Top,
            "middle" | "center" | "centre" => VerticalAlignment::Middle,
            "bottom" => VerticalAlignment::Bottom,
            "justify" => VerticalAlignment::Justify,
            "distributed" => VerticalAlignment::Distributed,
            _ => return None,
        };
        Some(align)
    }
}
