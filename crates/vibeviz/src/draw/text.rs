//! Text label drawable.
//!
//! Labels are placed at fixed positions, so no text measurement happens
//! here; alignment is delegated to the SVG `text-anchor` attribute.
//! Multi-line content renders as one `<text>` element per line, stacked
//! downward from the anchor position.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::Drawable,
    geometry::Point,
};

const FONT_FAMILY: &str = "Arial";

/// Line spacing as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.25;

/// Horizontal alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A text label with font size, weight, style, anchor, and fill color.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    font_size: f32,
    anchor: TextAnchor,
    weight: FontWeight,
    style: FontStyle,
    color: Color,
}

impl Text {
    /// Creates a label with the given content and font size in pixels.
    /// Defaults: middle anchor, normal weight and style, black fill.
    pub fn new(content: impl Into<String>, font_size: f32) -> Self {
        Self {
            content: content.into(),
            font_size,
            anchor: TextAnchor::Middle,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            color: Color::default(),
        }
    }

    /// Sets the horizontal anchor (builder style).
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Renders the label bold (builder style).
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Renders the label italic (builder style).
    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    /// Sets the fill color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the label content.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn render_line(&self, line: &str, position: Point) -> svg_element::Text {
        let mut text = svg_element::Text::new(escape_xml_text(line))
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.anchor.to_svg_value())
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", self.font_size)
            .set("fill", self.color.to_string());

        if self.weight == FontWeight::Bold {
            text = text.set("font-weight", "bold");
        }
        if self.style == FontStyle::Italic {
            text = text.set("font-style", "italic");
        }

        text
    }
}

impl Drawable for Text {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        let mut lines = self.content.lines();

        // Single-line labels are the common case and need no wrapping group.
        let first = lines.next().unwrap_or_default();
        let rest: Vec<&str> = lines.collect();
        if rest.is_empty() {
            return self.render_line(first, position).into();
        }

        let line_height = self.font_size * LINE_HEIGHT_FACTOR;
        let mut group = svg_element::Group::new().add(self.render_line(first, position));
        for (i, line) in rest.iter().enumerate() {
            let line_position = position.offset(0.0, (i as f32 + 1.0) * line_height);
            group = group.add(self.render_line(line, line_position));
        }

        Box::new(group)
    }
}

/// Escapes the XML-significant characters in text content.
///
/// The svg crate writes text nodes verbatim, and label content contains
/// literal ampersands ("Models & ORM"), which would otherwise produce an
/// SVG the PDF converter rejects.
pub(crate) fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(text: &Text, position: Point) -> String {
        let group = svg_element::Group::new().add(text.render_to_svg(position));
        group.to_string()
    }

    #[test]
    fn test_single_line_text() {
        let text = Text::new("System Architecture Overview", 14.0).italic();
        let rendered = render_to_string(&text, Point::new(576.0, 72.0));

        assert!(rendered.contains("System Architecture Overview"));
        assert!(rendered.contains(r#"text-anchor="middle""#));
        assert!(rendered.contains(r#"font-style="italic""#));
        assert!(!rendered.contains("font-weight"));
    }

    #[test]
    fn test_bold_text() {
        let text = Text::new("Frontend Layer", 14.0).bold();
        let rendered = render_to_string(&text, Point::default());

        assert!(rendered.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn test_multi_line_text_stacks_lines() {
        let text = Text::new("Route Handlers\nAuth Routes", 8.0).with_anchor(TextAnchor::Start);
        let rendered = render_to_string(&text, Point::new(10.0, 100.0));

        assert!(rendered.contains("Route Handlers"));
        assert!(rendered.contains("Auth Routes"));
        // Second line sits one line-height below the first.
        assert!(rendered.contains(r#"y="100""#));
        assert!(rendered.contains(r#"y="110""#));
    }

    #[test]
    fn test_ampersand_is_escaped() {
        let text = Text::new("Models & ORM", 11.0);
        let rendered = render_to_string(&text, Point::default());

        assert!(rendered.contains("Models &amp; ORM"));
        assert!(!rendered.contains("Models & ORM"));
    }

    #[test]
    fn test_escape_xml_text() {
        assert_eq!(escape_xml_text("a & b"), "a &amp; b");
        assert_eq!(escape_xml_text("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml_text("plain"), "plain");
    }
}
