// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests over request fixtures.
//!
//! Each test loads a file from `tests/fixtures/` through the same entry
//! points the `opflow` binary uses.

use std::path::PathBuf;

use opflow::commands::{check_file, explain_code, graph_file, run_file, RunOptions};
use opflow::output::{render_json, render_text, OutputFormat};
use opflow::CliError;
use opflow_diagnostic::ErrorCode;
use opflow_eval::EvalConfig;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(name: &str) -> opflow::commands::RunOutput {
    run_file(&fixture(name), &RunOptions::default()).unwrap()
}

#[test]
fn json_and_text_requests_agree() {
    let json = run("example.json");
    let text = run("example.txt");

    assert_eq!(json.evaluation.result, text.evaluation.result);
    assert_eq!(render_text(&json.evaluation), "x = 12\ny = 9\n");
}

#[test]
fn unordered_request_resolves_everything() {
    let output = run("unordered.txt");

    assert_eq!(
        render_text(&output.evaluation),
        "x = 12\nw = 972\nw1 = 11664\nw2 = 324\n"
    );
    assert!(output.evaluation.diagnostics.is_empty());
    assert_eq!(output.evaluation.report.waves, 5);
}

#[test]
fn sequential_run_matches_parallel_run() {
    let sequential = RunOptions {
        eval: EvalConfig::sequential(),
        ..RunOptions::default()
    };
    let a = run_file(&fixture("unordered.txt"), &sequential).unwrap();
    let b = run("unordered.txt");

    assert_eq!(a.evaluation.result, b.evaluation.result);
}

#[test]
fn missing_variable_response() {
    let output = run("missing.json");
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&output.evaluation).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "items": [{"var": "missing", "value": 0}],
            "warning": "WARNING: variable(s) missing called for print before calculation"
        })
    );
}

#[test]
fn cycle_is_reported_as_broken() {
    let output = run("cycle.txt");
    let codes: Vec<ErrorCode> = output
        .evaluation
        .diagnostics
        .iter()
        .map(|d| d.code)
        .collect();

    assert_eq!(output.evaluation.report.waves, 0);
    assert_eq!(
        codes,
        vec![ErrorCode::W6004, ErrorCode::W6004, ErrorCode::W6001]
    );
    assert_eq!(
        render_text(&output.evaluation),
        "p = 0\nWARNING: variable(s) p called for print before calculation\n"
    );
}

#[test]
fn unsupported_operator_only_breaks_its_target() {
    let output = run("unsupported.txt");

    assert_eq!(output.evaluation.result.value_of("ok"), Some(9));
    assert_eq!(output.evaluation.broken().len(), 1);
    assert_eq!(output.evaluation.diagnostics[0].code, ErrorCode::W6002);
}

#[test]
fn duplicate_definition_fails_the_request() {
    let err = run_file(&fixture("duplicate.txt"), &RunOptions::default()).unwrap_err();

    assert!(matches!(err, CliError::Program(_)));
    assert_eq!(err.to_diagnostic().unwrap().code, ErrorCode::E2001);
}

#[test]
fn unknown_operation_type_fails_the_request() {
    let err = check_file(&fixture("bad_type.json")).unwrap_err();

    let diagnostic = err.to_diagnostic().unwrap();
    assert_eq!(diagnostic.code, ErrorCode::E1001);
    assert_eq!(diagnostic.operation, Some(1));
}

#[test]
fn check_counts_operations() {
    let summary = check_file(&fixture("unordered.txt")).unwrap();

    assert_eq!(summary.operations, 10);
    assert_eq!(summary.calcs, 6);
    assert_eq!(summary.prints, 4);
}

#[test]
fn graph_command_prints_dot() {
    let dot = graph_file(&fixture("example.txt")).unwrap();

    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.contains("\"z\" [label=\"z\", fillcolor=mistyrose];"));
    assert!(dot.contains("\"x\" -> \"y\";"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn run_writes_dot_file() {
    let dir = tempfile::tempdir().unwrap();
    let dot_path = dir.path().join("graph.dot");
    let options = RunOptions {
        dot: Some(dot_path.clone()),
        format: OutputFormat::Json,
        ..RunOptions::default()
    };

    let output = run_file(&fixture("example.json"), &options).unwrap();

    assert!(output.png_error.is_none());
    let written = std::fs::read_to_string(&dot_path).unwrap();
    assert_eq!(written, graph_file(&fixture("example.json")).unwrap());
}

#[test]
fn png_option_writes_dot_next_to_the_image() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        png: Some(dir.path().join("graph.png")),
        ..RunOptions::default()
    };

    let output = run_file(&fixture("example.txt"), &options).unwrap();

    let written = std::fs::read_to_string(dir.path().join("graph.dot")).unwrap();
    assert_eq!(written, graph_file(&fixture("example.txt")).unwrap());
    assert_eq!(render_text(&output.evaluation), "x = 12\ny = 9\n");
}

#[test]
fn failed_png_render_does_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        dot: Some(dir.path().join("graph.dot")),
        png: Some(dir.path().join("no-such-dir").join("graph.png")),
        ..RunOptions::default()
    };

    let output = run_file(&fixture("example.json"), &options).unwrap();

    // Either `dot` is not installed or it cannot write into a missing
    // directory; both are reported without losing the results.
    assert!(matches!(
        output.png_error,
        Some(CliError::Io { .. } | CliError::Render { .. })
    ));
    assert!(dir.path().join("graph.dot").exists());
    assert_eq!(output.evaluation.result.value_of("y"), Some(9));
}

#[test]
fn explain_known_and_unknown_codes() {
    assert!(explain_code("w6001").unwrap().starts_with("# W6001"));
    assert!(matches!(explain_code("X0000"), Err(CliError::Usage(_))));
}
