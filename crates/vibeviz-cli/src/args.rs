//! Command-line argument definitions for the Vibeviz CLI.
//!
//! Invoked with no arguments, the tool writes
//! `vibe_system_architecture.pdf` to the working directory; the flags here
//! only override the destination, format, and logging verbosity.

use std::path::Path;

use clap::{Parser, ValueEnum};

/// Default output filename, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "vibe_system_architecture.pdf";

/// Command-line arguments for the Vibe architecture diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Supported export formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl Args {
    /// Resolves the export format: an explicit `--format` wins, otherwise
    /// the output extension decides, defaulting to PDF.
    pub fn resolved_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }

        match Path::new(&self.output).extension().and_then(|e| e.to_str()) {
            Some("svg") => OutputFormat::Svg,
            _ => OutputFormat::Pdf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_the_fixed_pdf_name() {
        let args = Args::parse_from(["vibeviz"]);
        assert_eq!(args.output, "vibe_system_architecture.pdf");
        assert_eq!(args.resolved_format(), OutputFormat::Pdf);
    }

    #[test]
    fn test_format_inferred_from_extension() {
        let args = Args::parse_from(["vibeviz", "--output", "diagram.svg"]);
        assert_eq!(args.resolved_format(), OutputFormat::Svg);

        let args = Args::parse_from(["vibeviz", "--output", "diagram.pdf"]);
        assert_eq!(args.resolved_format(), OutputFormat::Pdf);

        let args = Args::parse_from(["vibeviz", "--output", "no-extension"]);
        assert_eq!(args.resolved_format(), OutputFormat::Pdf);
    }

    #[test]
    fn test_explicit_format_wins_over_extension() {
        let args = Args::parse_from(["vibeviz", "--output", "diagram.svg", "--format", "pdf"]);
        assert_eq!(args.resolved_format(), OutputFormat::Pdf);
    }
}
