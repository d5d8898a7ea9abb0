//! One request, end to end.
//!
//! `evaluate` runs liveness analysis, the wave scheduler and result
//! collection over a validated [`Program`], then turns everything the run
//! could not compute into warning diagnostics. All per-request state is
//! created here and dropped with the returned [`Evaluation`]'s inputs.

use opflow_diagnostic::{Diagnostic, ErrorCode};
use opflow_ir::{Name, Operation};

use crate::collect::{collect, EvaluationResult, PrintedValue};
use crate::event_sink::EventSink;
use crate::liveness::{analyze, DependencyGraph, LiveSet};
use crate::program::Program;
use crate::scheduler::{run_waves, DiscardReason, EvalConfig, ScheduleReport};
use crate::store::VariableStore;

/// Everything one evaluation produced.
#[derive(Debug)]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub live: LiveSet,
    pub graph: DependencyGraph,
    pub report: ScheduleReport,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    pub fn items(&self) -> &[PrintedValue] {
        &self.result.items
    }

    pub fn broken(&self) -> &[Name] {
        &self.result.broken
    }

    /// Response warning for the broken list, if any.
    pub fn warning(&self) -> Option<String> {
        warning_text(&self.result.broken)
    }
}

/// `WARNING: variable(s) a, b called for print before calculation`.
pub fn warning_text(broken: &[Name]) -> Option<String> {
    if broken.is_empty() {
        return None;
    }
    let names: Vec<&str> = broken.iter().map(Name::as_str).collect();
    Some(format!(
        "WARNING: variable(s) {} called for print before calculation",
        names.join(", ")
    ))
}

/// Evaluate a validated program.
#[tracing::instrument(level = "debug", skip_all, fields(operations = program.len()))]
pub fn evaluate(program: &Program, config: &EvalConfig, sink: &EventSink) -> Evaluation {
    let operations = program.operations();
    let (live, graph) = analyze(operations);

    let store = VariableStore::with_capacity(live.len());
    let report = run_waves(program, &live, &store, config, sink);
    let result = collect(operations, &store);

    let mut diagnostics = Vec::new();
    discard_diagnostics(&report, &mut diagnostics);
    unresolved_diagnostics(operations, &report, &store, &mut diagnostics);
    broken_print_diagnostics(program, &store, &mut diagnostics);

    tracing::debug!(
        waves = report.waves,
        computed = report.computed,
        broken = result.broken.len(),
        "evaluation finished"
    );

    Evaluation {
        result,
        live,
        graph,
        report,
        diagnostics,
    }
}

fn discard_diagnostics(report: &ScheduleReport, out: &mut Vec<Diagnostic>) {
    for discarded in &report.discarded {
        let diagnostic = match &discarded.reason {
            DiscardReason::UnsupportedOperator(symbol) => Diagnostic::warning(ErrorCode::W6002)
                .with_message(format!(
                    "unsupported operator `{symbol}` in definition of `{}`",
                    discarded.target
                ))
                .with_note("supported operators are `+`, `-` and `*`"),
            DiscardReason::Overflow => Diagnostic::warning(ErrorCode::W6003)
                .with_message(format!(
                    "integer overflow computing `{}`",
                    discarded.target
                ))
                .with_note("values are signed 64-bit integers"),
        };
        out.push(
            diagnostic
                .with_variable(discarded.target.clone())
                .with_operation(discarded.operation),
        );
    }
}

fn unresolved_diagnostics(
    operations: &[Operation],
    report: &ScheduleReport,
    store: &VariableStore,
    out: &mut Vec<Diagnostic>,
) {
    for &index in &report.unresolved {
        let operation = &operations[index];
        let target = operation.target();
        let mut diagnostic = Diagnostic::warning(ErrorCode::W6004)
            .with_message(format!("`{target}` could not be computed"))
            .with_variable(target.clone())
            .with_operation(index);
        for missing in operation
            .references()
            .filter(|name| !store.contains(name.as_str()))
        {
            diagnostic = diagnostic.with_note(format!("`{missing}` has no value"));
        }
        out.push(diagnostic);
    }
}

fn broken_print_diagnostics(program: &Program, store: &VariableStore, out: &mut Vec<Diagnostic>) {
    for (index, operation) in program.operations().iter().enumerate() {
        let Operation::Print { target } = operation else {
            continue;
        };
        if store.contains(target.as_str()) {
            continue;
        }
        let note = match program.definition_of(target.as_str()) {
            Some(definition) => format!(
                "`{target}` is defined by operation #{definition} but its value never resolved"
            ),
            None => format!("no `calc` defines `{target}`"),
        };
        out.push(
            Diagnostic::warning(ErrorCode::W6001)
                .with_message(format!("variable `{target}` called for print before calculation"))
                .with_variable(target.clone())
                .with_operation(index)
                .with_note(note),
        );
    }
}
