//! Stroke definitions for outlines and connector lines.

use crate::color::Color;

/// An outline definition: color and width.
///
/// Every line in the diagram is solid, so this carries only the two
/// properties the renderer varies.
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = Stroke::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_stroke_new() {
        let stroke = Stroke::new(Color::new("#34495e").unwrap(), 2.0);
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color(), Color::new("#34495e").unwrap());
    }
}
