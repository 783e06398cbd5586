//! Cell styling types
//!
//! This module contains the concrete style attributes a [`Cell`](crate::Cell)
//! can carry:
//! - [`Font`] - Font settings
//! - [`Alignment`] - Text alignment
//! - [`Border`] - Cell borders
//! - [`Fill`] - Background fill
//! - [`Color`] - ARGB color

mod alignment;
mod border;
mod color;
mod fill;
mod font;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderEdge, BorderLineStyle};
pub use color::Color;
pub use fill::Fill;
pub use font::{Font, Underline};
