//! Fill/background style types

use super::Color;

/// Solid background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fill {
    /// Foreground color of the solid pattern
    pub color: Color,
}

impl Fill {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Fill { color }
    }
}
