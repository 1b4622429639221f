//! CLI logic for the Vibe architecture diagram tool.

mod args;

pub use args::{Args, DEFAULT_OUTPUT, OutputFormat};

use log::{debug, info};

use vibeviz::{
    VibevizError,
    diagram::{ArchitectureDiagram, SUMMARY_CONTENTS},
    export::{Exporter, PdfExporter, SvgExporter},
};

/// Run the Vibeviz CLI application
///
/// Renders the architecture diagram, exports it to the requested output
/// file, and prints the summary block to stdout.
///
/// # Errors
///
/// Returns `VibevizError` for:
/// - File I/O errors
/// - PDF conversion errors
pub fn run(args: &Args) -> Result<(), VibevizError> {
    info!(output_path = args.output; "Rendering architecture diagram");

    let figure = ArchitectureDiagram::new().render();
    debug!("Figure rendered");

    match args.resolved_format() {
        OutputFormat::Pdf => PdfExporter::new(&args.output).export_figure(&figure)?,
        OutputFormat::Svg => SvgExporter::new(&args.output).export_figure(&figure)?,
    }

    info!(output_file = args.output; "Diagram exported successfully");
    print_summary(&args.output);

    Ok(())
}

/// Prints the fixed success summary to stdout. Logs go to stderr, so this
/// is the only output on the standard stream.
fn print_summary(output: &str) {
    println!("System architecture diagram created: {output}");
    println!("Diagram includes:");
    for entry in SUMMARY_CONTENTS {
        println!("   - {entry}");
    }
}
