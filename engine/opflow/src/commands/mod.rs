//! Command handlers for the `opflow` CLI.
//!
//! Each submodule implements one command. Handlers return their results
//! instead of printing them so that `main.rs` owns stdout, stderr and the
//! exit code. Diagnostic reporting shared by all commands lives here.

use std::io;

use opflow_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use opflow_diagnostic::Diagnostic;

use crate::output::OutputFormat;
use crate::CliError;

mod check;
mod explain;
mod graph;
mod run;

pub use check::{check_file, CheckSummary};
pub use explain::explain_code;
pub use graph::{graph_file, render_png, write_dot};
pub use run::{evaluate_program, parse_run_options, run_file, RunOptions, RunOutput};

/// Write diagnostics to stderr in the requested format.
pub fn emit_diagnostics(diagnostics: &[Diagnostic], format: OutputFormat) {
    if diagnostics.is_empty() {
        return;
    }
    match format {
        OutputFormat::Text => {
            let mut emitter = TerminalEmitter::stderr(ColorMode::Auto);
            emitter.emit_all(diagnostics);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(io::stderr());
            emitter.emit_all(diagnostics);
            emitter.flush();
        }
    }
}

/// Report a failed command: as a coded diagnostic when the request is at
/// fault, as a plain `error:` line otherwise.
pub fn report_error(err: &CliError, format: OutputFormat) {
    match err.to_diagnostic() {
        Some(diagnostic) => emit_diagnostics(&[diagnostic], format),
        None => eprintln!("error: {err}"),
    }
}
