//! Rendering evaluation results.

use std::fmt::Write;
use std::time::Duration;

use opflow_eval::Evaluation;
use opflow_ir::{OperationResponse, VariableValue};

/// Output encoding for results and diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// The response body for an evaluation.
pub fn to_response(evaluation: &Evaluation) -> OperationResponse {
    OperationResponse {
        items: evaluation
            .items()
            .iter()
            .map(|item| VariableValue {
                var: item.var.clone(),
                value: item.value,
            })
            .collect(),
        warning: evaluation.warning(),
    }
}

/// One `name = value` line per print, then the warning if any.
pub fn render_text(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    for item in evaluation.items() {
        let _ = writeln!(out, "{} = {}", item.var, item.value);
    }
    if let Some(warning) = evaluation.warning() {
        out.push_str(&warning);
        out.push('\n');
    }
    out
}

pub fn render_json(evaluation: &Evaluation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_response(evaluation))
}

/// Human-readable processing time: `ns` below a microsecond, then `µs`,
/// `ms` and seconds with two decimals.
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_micros(1) {
        format!("{} ns", duration.as_nanos())
    } else if duration < Duration::from_millis(1) {
        format!("{:.2} µs", duration.as_secs_f64() * 1e6)
    } else if duration < Duration::from_secs(1) {
        format!("{:.2} ms", duration.as_secs_f64() * 1e3)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
