//! Straight connector arrows and their SVG marker definitions.
//!
//! Arrowheads are SVG markers referenced by the connector path. Marker
//! definitions are keyed by color and emitted once per color into the
//! document `<defs>`, so any number of arrows can share one definition.

use svg::node::element::{Definitions, Marker, Path};

use crate::{color::Color, draw::Stroke, geometry::Point};

/// A straight, single-headed connector line.
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    stroke: Stroke,
}

impl Arrow {
    /// Creates an arrow drawn with the given stroke.
    pub fn new(stroke: Stroke) -> Self {
        Self { stroke }
    }

    /// Returns the arrow stroke.
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Renders this arrow from `start` to `end` as an SVG path with an
    /// arrowhead marker at the end.
    pub fn render_to_svg(&self, start: Point, end: Point) -> Path {
        let path_data = format!(
            "M {} {} L {} {}",
            start.x(),
            start.y(),
            end.x(),
            end.y()
        );

        Path::new()
            .set("d", path_data)
            .set("fill", "none")
            .set("stroke", self.stroke.color().to_string())
            .set("stroke-width", self.stroke.width())
            .set("marker-end", marker_reference(self.stroke.color()))
    }
}

/// Returns the `url(#...)` reference to the arrowhead marker for a color.
pub fn marker_reference(color: Color) -> String {
    format!("url(#arrow-head-{})", color.to_id_safe_string())
}

/// Creates arrowhead marker definitions for the colors in use.
pub fn marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: IntoIterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let head = Marker::new()
            .set("id", format!("arrow-head-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(head);
    }

    defs
}
