use std::fs;

use tempfile::tempdir;

use vibeviz_cli::{Args, DEFAULT_OUTPUT, run};

fn args_for(output: &str) -> Args {
    Args {
        output: output.to_string(),
        format: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_default_filename_produces_valid_pdf() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);
    let output = output_path.to_string_lossy().to_string();

    run(&args_for(&output)).expect("Run failed");

    let bytes = fs::read(&output_path).expect("Output file missing");
    assert!(!bytes.is_empty(), "Output PDF is empty");
    assert!(
        bytes.starts_with(b"%PDF-"),
        "Output does not start with the PDF magic bytes"
    );
}

#[test]
fn e2e_rerun_overwrites_with_identical_bytes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);
    let output = output_path.to_string_lossy().to_string();

    run(&args_for(&output)).expect("First run failed");
    let first = fs::read(&output_path).expect("Output file missing after first run");

    run(&args_for(&output)).expect("Second run failed");
    let second = fs::read(&output_path).expect("Output file missing after second run");

    assert_eq!(first, second, "Repeated runs produced different bytes");
}

#[test]
fn e2e_svg_output_inferred_from_extension() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.svg");
    let output = output_path.to_string_lossy().to_string();

    run(&args_for(&output)).expect("Run failed");

    let contents = fs::read_to_string(&output_path).expect("Output file missing");
    assert!(contents.contains("<svg"));
    assert!(contents.contains("Vibe Database Administration Assistant"));
}
