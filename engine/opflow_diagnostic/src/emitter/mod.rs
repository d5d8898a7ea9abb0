//! Diagnostic Emitters
//!
//! Provides different output formats for diagnostics:
//! - Terminal: human-readable output with optional ANSI colors
//! - JSON: machine-readable output for tooling

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::diagnostic::count_by_severity;
use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics followed by a summary line.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
        let (errors, warnings) = count_by_severity(diagnostics);
        self.emit_summary(errors, warnings);
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
