//! Filled rounded-rectangle drawable used for layer boxes and panels.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, Stroke},
    geometry::{Point, Size},
};

/// A rectangle with optional translucent fill, a solid outline, and
/// optionally rounded corners. The render position is the box center.
#[derive(Debug, Clone)]
pub struct RoundedBox {
    size: Size,
    fill: Option<Color>,
    stroke: Stroke,
    corner_radius: f32,
}

impl RoundedBox {
    /// Creates a box of the given pixel size with no fill, a default
    /// outline, and square corners.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            fill: None,
            stroke: Stroke::new(Color::default(), 1.0),
            corner_radius: 0.0,
        }
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the outline stroke (builder style).
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the corner radius in pixels (builder style).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Returns the pixel size of this box.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl Drawable for RoundedBox {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        // Position is the center of the box; the rect element wants the
        // top-left corner.
        let bounds = position.to_bounds(self.size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("stroke", self.stroke.color().to_string())
            .set("stroke-width", self.stroke.width());

        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }

        match self.fill {
            Some(fill) => {
                rect = rect
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());
            }
            None => {
                rect = rect.set("fill", "none");
            }
        }

        rect.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(drawable: &dyn Drawable, position: Point) -> String {
        let group = svg_element::Group::new().add(drawable.render_to_svg(position));
        group.to_string()
    }

    #[test]
    fn test_box_renders_centered_rect() {
        let layer = RoundedBox::new(Size::new(100.0, 40.0));
        let rendered = render_to_string(&layer, Point::new(60.0, 30.0));

        assert!(rendered.contains("<rect"));
        assert!(rendered.contains(r#"x="10""#));
        assert!(rendered.contains(r#"y="10""#));
        assert!(rendered.contains(r#"width="100""#));
        assert!(rendered.contains(r#"height="40""#));
    }

    #[test]
    fn test_box_without_fill_renders_none() {
        let panel = RoundedBox::new(Size::new(10.0, 10.0));
        let rendered = render_to_string(&panel, Point::default());

        assert!(rendered.contains(r#"fill="none""#));
        assert!(!rendered.contains("fill-opacity"));
    }

    #[test]
    fn test_box_fill_carries_opacity() {
        let fill = Color::new("#2ecc71").unwrap().with_alpha(0.7);
        let layer = RoundedBox::new(Size::new(10.0, 10.0)).with_fill(fill);
        let rendered = render_to_string(&layer, Point::default());

        assert!(rendered.contains("fill-opacity"));
        assert!(rendered.contains("0.7"));
    }

    #[test]
    fn test_box_corner_radius_only_when_rounded() {
        let square = RoundedBox::new(Size::new(10.0, 10.0));
        assert!(!render_to_string(&square, Point::default()).contains("rx="));

        let rounded = RoundedBox::new(Size::new(10.0, 10.0)).with_corner_radius(7.2);
        assert!(render_to_string(&rounded, Point::default()).contains(r#"rx="7.2""#));
    }
}
