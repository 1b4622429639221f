//! Drawable primitives for diagram rendering.
//!
//! Every element placed on the canvas implements the [`Drawable`] trait,
//! which renders the element to an SVG node at a given center position.
//! Positions are in pixel space; the canvas performs the unit conversion.

mod arrow;
mod rounded_box;
mod stroke;
mod text;

pub use arrow::{Arrow, marker_definitions, marker_reference};
pub use rounded_box::RoundedBox;
pub use stroke::Stroke;
pub use text::{FontStyle, FontWeight, Text, TextAnchor};

use crate::geometry::Point;

pub trait Drawable: std::fmt::Debug {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node>;
}
