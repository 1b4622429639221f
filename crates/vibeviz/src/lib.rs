//! Vibeviz - renders the Vibe Database Manager architecture overview.
//!
//! The crate draws one fixed diagram (layer boxes, flow arrows, a legend and
//! a technology panel) onto a [`canvas::Canvas`], producing a
//! [`canvas::Figure`] that the [`export`] module writes out as PDF or SVG.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vibeviz::diagram::ArchitectureDiagram;
//! use vibeviz::export::{Exporter, PdfExporter};
//!
//! let figure = ArchitectureDiagram::new().render();
//! let exporter = PdfExporter::new("vibe_system_architecture.pdf");
//! exporter.export_figure(&figure).expect("Failed to export");
//! ```

pub mod canvas;
pub mod color;
pub mod diagram;
pub mod draw;
pub mod export;
pub mod geometry;

mod error;

pub use error::VibevizError;
