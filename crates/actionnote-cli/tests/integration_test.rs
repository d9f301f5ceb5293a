//! Integration tests comparing CLI output with the core Display
//! implementations
//!
//! The CLI and the MCP server render through the same core views, so plain
//! CLI output must match what those views produce directly.

use std::process::Command;

use actionnote_core::{
    display::BundleView, params::GenerationParams, ArtifactGenerator, DurationPreset, Locale,
};

/// Run a CLI command and capture its output
fn run_cli_command(args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_actionnote"));
    cmd.arg("--no-color");

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "command failed: {args:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn expected_bundle(text: &str, locale: Locale, deadline_days: i64) -> String {
    let params = GenerationParams::new(DurationPreset::Standard, deadline_days).unwrap();
    let bundle = ArtifactGenerator::new()
        .with_locale(locale)
        .generate(text, &params);
    BundleView::new(&bundle, locale).to_string()
}

#[test]
fn test_generate_output_consistency() {
    let cli_output = run_cli_command(&["generate", "--text", "Agenda: feature A"]);
    assert_eq!(cli_output, expected_bundle("Agenda: feature A", Locale::En, 7));
}

#[test]
fn test_generate_korean_output_consistency() {
    let cli_output = run_cli_command(&[
        "--locale",
        "ko",
        "generate",
        "--text",
        "안건: 신규 기능 A",
        "--deadline-days",
        "2",
    ]);
    assert_eq!(cli_output, expected_bundle("안건: 신규 기능 A", Locale::Ko, 2));
}

#[test]
fn test_blank_output_consistency() {
    let cli_output = run_cli_command(&["generate", "--text", "  "]);
    assert_eq!(cli_output, expected_bundle("", Locale::En, 7));
}

#[test]
fn test_json_matches_core_bundle() {
    let cli_output = run_cli_command(&["generate", "--sample", "--json", "--deadline-days", "14"]);

    let params = GenerationParams::new(DurationPreset::Standard, 14).unwrap();
    let bundle = ArtifactGenerator::new().generate(actionnote_core::SAMPLE_NOTES, &params);
    assert_eq!(cli_output.trim_end(), bundle.to_json_pretty().unwrap());
}
