//! Color handling for diagram elements.
//!
//! Provides the [`Color`] type, a wrapper around `DynamicColor` from the
//! color crate that adds the conveniences the renderer needs: alpha
//! manipulation for translucent layer fills and ID-safe strings for SVG
//! marker definitions.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#3498db",
    /// "rgb(52, 152, 219)", or "white".
    ///
    /// # Examples
    ///
    /// ```
    /// use vibeviz::color::Color;
    ///
    /// let blue = Color::new("#3498db").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vibeviz::color::Color;
    ///
    /// let fill = Color::new("#e74c3c").unwrap().with_alpha(0.7);
    /// assert!((fill.alpha() - 0.7).abs() < 0.001);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color, between 0.0 (fully
    /// transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result is suitable for use inside an SVG ID attribute (marker
    /// definitions are keyed by color): only alphanumerics and underscores,
    /// with a letter prefix guaranteed.
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        // Replace invalid ID characters with underscores
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';'], "_");

        // Valid SVG IDs start with a letter
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let blue = Color::new("#3498db");
        assert!(blue.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("#9b59b6").unwrap();
        let translucent = color.with_alpha(0.7);
        assert!((translucent.alpha() - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let color = Color::new("#34495e").unwrap();
        let safe_id = color.to_id_safe_string();
        assert!(!safe_id.contains('#'));
        assert!(!safe_id.contains('('));
        assert!(!safe_id.contains(','));
        assert!(!safe_id.contains(' '));
        assert!(!safe_id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("white").unwrap();
        assert!(!format!("{color}").is_empty());
    }
}
