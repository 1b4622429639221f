//! Error types for Vibeviz operations.

use std::io;

use thiserror::Error;

/// The main error type for Vibeviz operations.
///
/// Rendering itself is infallible (the diagram is literal data); failures
/// come from writing the output file or converting the figure to PDF.
#[derive(Debug, Error)]
pub enum VibevizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("export error: {0}")]
    Export(#[from] crate::export::Error),
}
