//! Stroke description for outline drawing.

use crate::types::Color;

/// Describes how lines and outlines are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}
