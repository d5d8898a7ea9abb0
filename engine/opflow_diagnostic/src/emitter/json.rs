//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array of diagnostic
//! objects followed by a summary object.

use std::io::Write;

use serde_json::{json, Value};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// JSON emitter for machine-readable output.
///
/// Diagnostics are buffered and written as a single document on
/// [`flush`](DiagnosticEmitter::flush).
pub struct JsonEmitter<W: Write> {
    writer: W,
    diagnostics: Vec<Value>,
    summary: Option<Value>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            diagnostics: Vec::new(),
            summary: None,
        }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Convert a diagnostic into its JSON object form.
pub(crate) fn to_json(diagnostic: &Diagnostic) -> Value {
    json!({
        "code": diagnostic.code.as_str(),
        "severity": diagnostic.severity.to_string(),
        "message": diagnostic.message,
        "variable": diagnostic.variable.as_ref().map(opflow_ir::Name::as_str),
        "operation": diagnostic.operation,
        "notes": diagnostic.notes,
    })
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(to_json(diagnostic));
    }

    fn flush(&mut self) {
        let mut document = json!({ "diagnostics": std::mem::take(&mut self.diagnostics) });
        if let Some(summary) = self.summary.take() {
            document["summary"] = summary;
        }
        let _ = serde_json::to_writer_pretty(&mut self.writer, &document);
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        self.summary = Some(json!({
            "errors": error_count,
            "warnings": warning_count,
        }));
    }
}
