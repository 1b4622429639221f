//! The drawing surface and the in-memory figure it produces.
//!
//! The diagram is authored on a 16 x 12 unit canvas with the y-axis
//! pointing up. [`Canvas`] converts those units to SVG pixel space (one
//! unit is one inch at 72 px), flips the y-axis, and accumulates rendered
//! nodes in placement order. [`Canvas::into_figure`] seals the result into
//! a [`Figure`] ready for export.

use svg::{
    Document,
    node::element::{Definitions, Rectangle},
};

use crate::{
    draw::Drawable,
    geometry::{Point, Size},
};

/// Pixels per canvas unit (72 px per inch-sized unit).
pub const PIXELS_PER_UNIT: f32 = 72.0;

/// A fixed-size drawing surface with y-up unit coordinates.
pub struct Canvas {
    size_units: Size,
    scale: f32,
    nodes: Vec<Box<dyn svg::Node>>,
}

impl Canvas {
    /// Creates a canvas of the given logical size in units.
    pub fn new(size_units: Size) -> Self {
        Self {
            size_units,
            scale: PIXELS_PER_UNIT,
            nodes: Vec::new(),
        }
    }

    /// Returns the pixel size of the finished document.
    pub fn pixel_size(&self) -> Size {
        self.size_units.scale(self.scale)
    }

    /// Converts a length in units to pixels.
    pub fn px(&self, units: f32) -> f32 {
        units * self.scale
    }

    /// Converts a y-up unit coordinate to a y-down pixel point.
    pub fn point(&self, x: f32, y: f32) -> Point {
        Point::new(x * self.scale, (self.size_units.height() - y) * self.scale)
    }

    /// Converts a size in units to a size in pixels.
    pub fn size(&self, width: f32, height: f32) -> Size {
        Size::new(width, height).scale(self.scale)
    }

    /// Returns the pixel center of a box given by its lower-left corner and
    /// size in units, the way the diagram coordinates are specified.
    pub fn box_center(&self, x: f32, y: f32, width: f32, height: f32) -> Point {
        self.point(x + width / 2.0, y + height / 2.0)
    }

    /// Converts a font size in points to pixels at this canvas scale.
    pub fn font_px(&self, points: f32) -> f32 {
        points * self.scale / 72.0
    }

    /// Renders a drawable at the given pixel position and records it.
    /// Placement order is paint order.
    pub fn place(&mut self, drawable: &dyn Drawable, position: Point) {
        self.nodes.push(drawable.render_to_svg(position));
    }

    /// Records an already-rendered node (used for connector paths, which
    /// are positioned by their endpoints rather than a center).
    pub fn place_node(&mut self, node: Box<dyn svg::Node>) {
        self.nodes.push(node);
    }

    /// Seals the canvas into a [`Figure`]: a document with the canvas
    /// dimensions, a white background, the given marker definitions, and
    /// every placed node in order.
    pub fn into_figure(self, defs: Definitions) -> Figure {
        let pixel_size = self.pixel_size();

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", pixel_size.width())
            .set("height", pixel_size.height())
            .set("fill", "white");

        let mut document = Document::new()
            .set("width", pixel_size.width())
            .set("height", pixel_size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", pixel_size.width(), pixel_size.height()),
            )
            .add(defs)
            .add(background);

        for node in self.nodes {
            document = document.add(node);
        }

        Figure { document }
    }
}

/// The in-memory representation of the rendered diagram prior to export.
pub struct Figure {
    document: Document,
}

impl Figure {
    /// Returns the underlying SVG document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serializes the figure to SVG text.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}
