//! Figure exporters.
//!
//! A rendered [`Figure`] has no side effects until an [`Exporter`] persists
//! it. [`SvgExporter`] writes the document text; [`PdfExporter`] converts
//! the document through `usvg` and `svg2pdf` and writes the bytes. There is
//! no retry or fallback: any failure propagates to the caller.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use log::{error, info};
use thiserror::Error;

use crate::canvas::Figure;

#[derive(Debug, Error)]
pub enum Error {
    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A destination a figure can be exported to.
pub trait Exporter {
    fn export_figure(&self, figure: &Figure) -> Result<(), Error>;
}

/// Writes the figure as an SVG document.
pub struct SvgExporter {
    path: PathBuf,
}

impl SvgExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Exporter for SvgExporter {
    fn export_figure(&self, figure: &Figure) -> Result<(), Error> {
        info!(path:? = self.path; "Creating SVG file");
        let f = match File::create(&self.path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = self.path, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{}", figure.document()) {
            error!(path:? = self.path, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

/// Writes the figure as a PDF document.
pub struct PdfExporter {
    path: PathBuf,
}

impl PdfExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Exporter for PdfExporter {
    fn export_figure(&self, figure: &Figure) -> Result<(), Error> {
        let bytes = pdf::render(figure)?;

        info!(path:? = self.path; "Creating PDF file");
        if let Err(err) = fs::write(&self.path, bytes) {
            error!(path:? = self.path, err:err; "Failed to write PDF file");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

pub mod pdf {
    //! SVG to PDF conversion.

    use super::Error;
    use crate::canvas::Figure;

    /// Converts a figure to PDF bytes.
    ///
    /// The conversion is a pure function of the SVG text and the loaded
    /// fonts, so repeated calls yield identical bytes.
    pub fn render(figure: &Figure) -> Result<Vec<u8>, Error> {
        let svg_text = figure.to_svg_string();

        let mut options = svg2pdf::usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        // Keep output stable across environments while still using system fonts.
        options.font_family = "Arial".to_string();

        let tree = svg2pdf::usvg::Tree::from_str(&svg_text, &options)
            .map_err(|_| Error::Render("failed to parse SVG for PDF conversion".to_string()))?;

        svg2pdf::to_pdf(
            &tree,
            svg2pdf::ConversionOptions::default(),
            svg2pdf::PageOptions::default(),
        )
        .map_err(|_| Error::Render("failed to convert SVG to PDF".to_string()))
    }
}
